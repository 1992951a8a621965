//! Data models for the job-insights pipeline: raw feed records, the caller's
//! priority profile, and the scored/summarised response.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const SALARY_NOT_DISCLOSED: &str = "Not Disclosed";

// ────────────────────────────────────────────────────────────────────────────
// Feed records
// ────────────────────────────────────────────────────────────────────────────

/// One posting as received from the listing feed. Every field is optional:
/// records with missing or oddly typed fields are kept, with those fields absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawListing {
    pub title: Option<String>,
    pub company_name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub candidate_required_location: Option<String>,
    pub job_type: Option<String>,
    pub publication_date: Option<String>,
    /// Outer `None`: the key is missing. `Some(None)`: present but `null` or
    /// not representable as text.
    pub salary: Option<Option<String>>,
    pub url: Option<String>,
}

impl RawListing {
    /// Decodes a feed record leniently. Strings are taken as-is, numbers and
    /// booleans are rendered as text, anything else counts as absent.
    /// A non-object record yields a listing with every field absent.
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| value.get(key).and_then(text_of);

        RawListing {
            title: field("title"),
            company_name: field("company_name"),
            description: field("description"),
            category: field("category"),
            candidate_required_location: field("candidate_required_location"),
            job_type: field("job_type"),
            publication_date: field("publication_date"),
            salary: value.get("salary").map(text_of),
            url: field("url"),
        }
    }

    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    pub fn category_text(&self) -> &str {
        self.category.as_deref().unwrap_or_default()
    }

    pub fn location_text(&self) -> &str {
        self.candidate_required_location
            .as_deref()
            .unwrap_or_default()
    }
}

fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Caller input
// ────────────────────────────────────────────────────────────────────────────

/// What the caller cares about. Each field may be omitted or `null`; an empty
/// field simply contributes nothing to the score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriorityProfile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tech_stack: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
}

pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ────────────────────────────────────────────────────────────────────────────
// Output
// ────────────────────────────────────────────────────────────────────────────

/// Display subset of a listing plus its priority score in [0.0, 1.0].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredListing {
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub published_on: Option<String>,
    pub priority_score: f64,
    pub apply_url: Option<String>,
    pub salary: Option<String>,
}

impl ScoredListing {
    pub fn from_raw(listing: RawListing, priority_score: f64) -> Self {
        ScoredListing {
            job_title: listing.title,
            company: listing.company_name,
            location: listing.candidate_required_location,
            job_type: listing.job_type,
            published_on: listing.publication_date,
            priority_score,
            apply_url: listing.url,
            // The placeholder only stands in for a missing key; an explicit
            // null from the feed stays null.
            salary: listing
                .salary
                .unwrap_or_else(|| Some(SALARY_NOT_DISCLOSED.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsSummary {
    pub total_jobs_analyzed: usize,
    pub software_jobs_found: usize,
    pub top_roles: Vec<String>,
    pub top_tech: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsResponse {
    pub insights_summary: InsightsSummary,
    pub recommended_jobs: Vec<ScoredListing>,
}
