//! Listing Source Adapter: the only outbound call the pipeline makes.
//!
//! `ListingSource` is the seam: production uses `FeedClient` over HTTP, tests
//! swap in an in-memory source. One fetch is one request; no retries here.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::insights::models::RawListing;

const USER_AGENT: &str = concat!("insights-api/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed returned status {status}")]
    Status { status: u16 },

    #[error("Feed body is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Unexpected feed shape: {0}")]
    Shape(&'static str),
}

/// Anything that can produce a fresh snapshot of raw listings.
///
/// Carried in `AppState` as `Arc<dyn ListingSource>`.
#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<RawListing>, SourceError>;
}

/// HTTP client for the remote job feed (`GET <url>` → `{ "jobs": [...] }`).
#[derive(Clone)]
pub struct FeedClient {
    client: Client,
    feed_url: String,
}

impl FeedClient {
    pub fn new(feed_url: String, timeout: Duration) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client, feed_url })
    }
}

#[async_trait]
impl ListingSource for FeedClient {
    async fn fetch(&self) -> Result<Vec<RawListing>, SourceError> {
        let response = self.client.get(&self.feed_url).send().await.map_err(|e| {
            warn!("Feed request to {} failed: {e}", self.feed_url);
            SourceError::Http(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Feed {} returned {}", self.feed_url, status);
            return Err(SourceError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let envelope: Value = serde_json::from_slice(&body)?;
        let listings = parse_envelope(&envelope)?;

        info!(
            "Fetched {} listings from {}",
            listings.len(),
            self.feed_url
        );
        Ok(listings)
    }
}

/// Extracts listings from the feed envelope. A missing `jobs` key means an
/// empty feed; individual records are decoded leniently.
pub fn parse_envelope(envelope: &Value) -> Result<Vec<RawListing>, SourceError> {
    let Value::Object(map) = envelope else {
        return Err(SourceError::Shape("envelope is not a JSON object"));
    };

    match map.get("jobs") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(jobs)) => Ok(jobs.iter().map(RawListing::from_value).collect()),
        Some(_) => Err(SourceError::Shape("`jobs` is not an array")),
    }
}
