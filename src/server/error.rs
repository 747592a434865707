//! Error types and JSON error responses for the counter API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::domain::DomainError;

/// Errors returned by counter API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body missing, not JSON, or missing `value`.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Well-formed request carrying a value no counter can hold.
    #[error("Invalid counter: {0}")]
    InvalidCounter(#[from] DomainError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidCounter(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::InvalidRequest(_) => "invalid_request",
            ApiError::InvalidCounter(_) => "invalid_counter",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
            }
        });
        (self.status_code(), Json(body)).into_response()
    }
}
