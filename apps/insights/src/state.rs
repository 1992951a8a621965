use crate::insights::pipeline::InsightsPipeline;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; each request gets its own feed snapshot.
#[derive(Clone)]
pub struct AppState {
    /// Wraps the pluggable `ListingSource`. Default: `FeedClient` over HTTP.
    pub pipeline: InsightsPipeline,
}
