//! Axum route handlers for the Job Insights API.

use axum::{body::Bytes, extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::insights::models::{null_as_default, InsightsResponse, PriorityProfile};
use crate::insights::ranking::SortStrategy;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct InsightsRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub priority: PriorityProfile,
    #[serde(default)]
    pub sort_by: Option<String>,
}

impl InsightsRequest {
    /// An empty body is the same as `{}`; anything else must be a JSON object.
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        serde_json::from_slice(body)
            .map_err(|e| AppError::Validation(format!("Invalid request body: {e}")))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/insights
///
/// Fetches the listing feed, keeps software roles, scores them against the
/// caller's priorities and returns the ranked top 50 with a summary.
pub async fn handle_job_insights(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<InsightsResponse>, AppError> {
    let request = InsightsRequest::from_body(&body)?;
    let strategy = SortStrategy::from_request(request.sort_by.as_deref());

    let response = state.pipeline.run(&request.priority, strategy).await?;

    Ok(Json(response))
}
