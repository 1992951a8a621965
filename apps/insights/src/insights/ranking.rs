//! Ranker & Summarizer: orders scored listings and builds the summary block.

use std::cmp::Ordering;

use crate::insights::models::{InsightsSummary, ScoredListing};

/// Maximum number of listings returned to the caller.
pub const RESULT_LIMIT: usize = 50;
/// Number of top-ranked listings sampled for `top_roles`.
pub const TOP_ROLES_SAMPLE: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortStrategy {
    /// Highest priority score first.
    Relevance,
    /// Newest publication date first, compared as raw text.
    #[default]
    Recent,
}

impl SortStrategy {
    /// Lenient parse of the request's `sort_by`: only "relevance" selects
    /// relevance order, everything else (including absence) is recent.
    pub fn from_request(sort_by: Option<&str>) -> Self {
        match sort_by.map(|s| s.trim().to_lowercase()) {
            Some(s) if s == "relevance" => SortStrategy::Relevance,
            _ => SortStrategy::Recent,
        }
    }
}

/// Sorts in place with a stable sort, so ties keep feed order.
pub fn rank(listings: &mut [ScoredListing], strategy: SortStrategy) {
    match strategy {
        SortStrategy::Relevance => {
            listings.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score))
        }
        SortStrategy::Recent => listings.sort_by(compare_recent),
    }
}

/// Descending by publication text; undated listings go last.
fn compare_recent(a: &ScoredListing, b: &ScoredListing) -> Ordering {
    match (&a.published_on, &b.published_on) {
        (Some(x), Some(y)) => y.cmp(x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Builds the summary from an already ranked, not yet truncated, list.
pub fn summarize(
    total_analyzed: usize,
    ranked: &[ScoredListing],
    tech_stack: &[String],
) -> InsightsSummary {
    let mut top_roles: Vec<String> = Vec::new();
    for title in ranked
        .iter()
        .take(TOP_ROLES_SAMPLE)
        .filter_map(|l| l.job_title.as_ref())
    {
        if !top_roles.contains(title) {
            top_roles.push(title.clone());
        }
    }

    InsightsSummary {
        total_jobs_analyzed: total_analyzed,
        software_jobs_found: ranked.len(),
        top_roles,
        top_tech: tech_stack.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::models::RawListing;

    fn scored(title: &str, published_on: Option<&str>, score: f64) -> ScoredListing {
        ScoredListing::from_raw(
            RawListing {
                title: Some(title.to_string()),
                publication_date: published_on.map(str::to_string),
                ..RawListing::default()
            },
            score,
        )
    }

    #[test]
    fn test_from_request_defaults_to_recent() {
        assert_eq!(SortStrategy::from_request(None), SortStrategy::Recent);
        assert_eq!(SortStrategy::from_request(Some("recent")), SortStrategy::Recent);
        assert_eq!(SortStrategy::from_request(Some("salary")), SortStrategy::Recent);
        assert_eq!(SortStrategy::from_request(Some("")), SortStrategy::Recent);
    }

    #[test]
    fn test_from_request_relevance_case_insensitive() {
        assert_eq!(
            SortStrategy::from_request(Some("relevance")),
            SortStrategy::Relevance
        );
        assert_eq!(
            SortStrategy::from_request(Some(" Relevance ")),
            SortStrategy::Relevance
        );
    }

    #[test]
    fn test_relevance_sort_is_non_increasing() {
        let mut listings = vec![
            scored("a", None, 0.2),
            scored("b", None, 0.9),
            scored("c", None, 0.5),
            scored("d", None, 0.9),
        ];
        rank(&mut listings, SortStrategy::Relevance);

        let scores: Vec<f64> = listings.iter().map(|l| l.priority_score).collect();
        assert_eq!(scores, vec![0.9, 0.9, 0.5, 0.2]);
    }

    #[test]
    fn test_relevance_ties_keep_feed_order() {
        let mut listings = vec![
            scored("first", None, 0.4),
            scored("second", None, 0.4),
            scored("third", None, 0.4),
        ];
        rank(&mut listings, SortStrategy::Relevance);

        let titles: Vec<_> = listings.iter().map(|l| l.job_title.clone().unwrap()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_recent_sort_newest_first() {
        let mut listings = vec![
            scored("old", Some("2024-01-05T09:00:00"), 1.0),
            scored("new", Some("2024-12-25T10:00:00"), 0.0),
            scored("mid", Some("2024-06-01T00:00:00"), 0.5),
        ];
        rank(&mut listings, SortStrategy::Recent);

        let titles: Vec<_> = listings.iter().map(|l| l.job_title.clone().unwrap()).collect();
        assert_eq!(titles, vec!["new", "mid", "old"]);
        for pair in listings.windows(2) {
            assert!(pair[0].published_on >= pair[1].published_on);
        }
    }

    #[test]
    fn test_recent_sort_puts_undated_last() {
        let mut listings = vec![
            scored("undated", None, 1.0),
            scored("dated", Some("2023-01-01"), 0.0),
        ];
        rank(&mut listings, SortStrategy::Recent);
        assert_eq!(listings[0].job_title.as_deref(), Some("dated"));
        assert_eq!(listings[1].job_title.as_deref(), Some("undated"));
    }

    #[test]
    fn test_recent_compares_text_not_dates() {
        // Mixed formats compare lexicographically: "2024-1-9" > "2024-01-10".
        let mut listings = vec![
            scored("padded", Some("2024-01-10"), 0.0),
            scored("unpadded", Some("2024-1-9"), 0.0),
        ];
        rank(&mut listings, SortStrategy::Recent);
        assert_eq!(listings[0].job_title.as_deref(), Some("unpadded"));
    }

    #[test]
    fn test_summary_samples_first_five_titles_deduplicated() {
        let ranked = vec![
            scored("Backend Engineer", None, 0.9),
            scored("Backend Engineer", None, 0.8),
            scored("Data Engineer", None, 0.7),
            scored("DevOps Engineer", None, 0.6),
            scored("AI Engineer", None, 0.5),
            scored("Frontend Developer", None, 0.4),
        ];
        let summary = summarize(10, &ranked, &["Rust".to_string()]);

        assert_eq!(
            summary.top_roles,
            vec!["Backend Engineer", "Data Engineer", "DevOps Engineer", "AI Engineer"]
        );
        assert_eq!(summary.total_jobs_analyzed, 10);
        assert_eq!(summary.software_jobs_found, 6);
    }

    #[test]
    fn test_summary_echoes_tech_stack_unmodified() {
        let tech = vec!["Python".to_string(), "Django".to_string()];
        let summary = summarize(0, &[], &tech);
        assert_eq!(summary.top_tech, tech);
        assert!(summary.top_roles.is_empty());
        assert_eq!(summary.software_jobs_found, 0);
    }

    #[test]
    fn test_summary_skips_untitled_listings() {
        let mut untitled = scored("x", None, 0.1);
        untitled.job_title = None;
        let summary = summarize(1, &[untitled], &[]);
        assert!(summary.top_roles.is_empty());
        assert_eq!(summary.software_jobs_found, 1);
    }
}
