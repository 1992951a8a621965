use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::insights::source::SourceError;

pub const SOURCE_UNAVAILABLE_MESSAGE: &str =
    "Job listings are temporarily unavailable. Please try again later.";
pub const PROCESSING_MESSAGE: &str = "Failed to process job listings.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// The inner cause is logged, never sent to the caller.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Listing source unavailable: {0}")]
    SourceUnavailable(#[from] SourceError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Processing error: {0}")]
    Processing(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::SourceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::SourceUnavailable(_) => "SOURCE_UNAVAILABLE",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Processing(_) => "PROCESSING_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::SourceUnavailable(e) => {
                tracing::error!("Listing source error: {e}");
                SOURCE_UNAVAILABLE_MESSAGE.to_string()
            }
            AppError::Validation(msg) => msg.clone(),
            AppError::Processing(msg) => {
                tracing::error!("Processing error: {msg}");
                PROCESSING_MESSAGE.to_string()
            }
        };

        error_response(self.status(), self.code(), message)
    }
}

/// Builds the failure body shared by handlers and the panic guard.
pub fn error_response(status: StatusCode, code: &str, message: String) -> Response {
    let body = Json(json!({
        "error": message,
        "code": code,
    }));

    (status, body).into_response()
}

/// Response for a panicking handler, installed through `CatchPanicLayer`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Processing(format!("handler panicked: {detail}")).into_response()
}
