//! API error taxonomy and HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the order and dashboard APIs.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input: bad items, unknown status, unknown
    /// period. Reported to the caller, never retried.
    #[error("{0}")]
    Validation(String),

    /// A lookup or status update targeted a nonexistent order id.
    #[error("{0}")]
    NotFound(String),

    /// The persistence layer is unreachable. Retriable; mapped to 503 so
    /// callers can distinguish it from their own mistakes.
    #[error("order store unavailable")]
    StoreUnavailable(#[source] sqlx::Error),
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::StoreUnavailable(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::StoreUnavailable(err) => {
                tracing::error!(error = %err, "order store unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "order store unavailable".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
