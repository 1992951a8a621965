pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::errors::panic_response;
use crate::insights::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(health::health_handler))
        // Job Insights API
        .route("/api/insights", post(handlers::handle_job_insights))
        .route("/api/insights/", post(handlers::handle_job_insights))
        .with_state(state);

    with_panic_guard(router)
}

/// Turns a panicking handler into a structured processing-failure response.
pub fn with_panic_guard(router: Router) -> Router {
    router.layer(CatchPanicLayer::custom(panic_response))
}
