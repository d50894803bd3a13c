//! API error handling.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API error type.
///
/// Not-found bodies are plain text and rendered verbatim; internal errors
/// log the cause and return a generic body.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
            ApiError::Internal(message) => {
                tracing::error!("internal error: {message}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
            }
        }
    }
}

impl From<buildboard_store::StoreError> for ApiError {
    fn from(err: buildboard_store::StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}
