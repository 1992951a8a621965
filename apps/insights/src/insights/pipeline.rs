//! Pipeline Orchestrator: fetch → filter → score → rank/summarise → truncate.
//!
//! `analyze` is the pure part and owns every policy decision; `InsightsPipeline`
//! only adds the fetch and failure translation around it.

use std::sync::Arc;

use tracing::{debug, info};

use crate::errors::AppError;
use crate::insights::filter::is_relevant;
use crate::insights::models::{InsightsResponse, PriorityProfile, RawListing, ScoredListing};
use crate::insights::ranking::{rank, summarize, SortStrategy, RESULT_LIMIT};
use crate::insights::scoring::{score_breakdown, ProfileTerms};
use crate::insights::source::ListingSource;

#[derive(Clone)]
pub struct InsightsPipeline {
    source: Arc<dyn ListingSource>,
}

impl InsightsPipeline {
    pub fn new(source: Arc<dyn ListingSource>) -> Self {
        Self { source }
    }

    /// Runs one request end to end. A feed failure becomes
    /// `AppError::SourceUnavailable`; nothing is retried.
    pub async fn run(
        &self,
        profile: &PriorityProfile,
        strategy: SortStrategy,
    ) -> Result<InsightsResponse, AppError> {
        let raw = self.source.fetch().await?;

        // Scoring is CPU-only; keep it off the async workers.
        let profile = profile.clone();
        off_runtime(move || analyze(raw, &profile, strategy)).await
    }
}

/// Runs `task` on the blocking pool. A panic inside it surfaces as a
/// `JoinError` and becomes a processing failure.
async fn off_runtime<T, F>(task: F) -> Result<T, AppError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| AppError::Processing(format!("analysis task failed: {e}")))
}

/// Filters, scores, ranks and summarises one feed snapshot.
/// Deterministic for a given (snapshot, profile, strategy).
pub fn analyze(
    raw: Vec<RawListing>,
    profile: &PriorityProfile,
    strategy: SortStrategy,
) -> InsightsResponse {
    let total_analyzed = raw.len();
    let terms = ProfileTerms::new(profile);

    let mut scored: Vec<ScoredListing> = raw
        .into_iter()
        .filter(is_relevant)
        .map(|listing| {
            let breakdown = score_breakdown(&listing, &terms);
            debug!(
                "Scored '{}': {:?} -> {}",
                listing.title_text(),
                breakdown,
                breakdown.normalized()
            );
            ScoredListing::from_raw(listing, breakdown.normalized())
        })
        .collect();

    rank(&mut scored, strategy);
    let insights_summary = summarize(total_analyzed, &scored, &profile.tech_stack);

    scored.truncate(RESULT_LIMIT);

    info!(
        "Job insights ({:?}): analyzed={}, software={}, returned={}",
        strategy,
        insights_summary.total_jobs_analyzed,
        insights_summary.software_jobs_found,
        scored.len()
    );

    InsightsResponse {
        insights_summary,
        recommended_jobs: scored,
    }
}
