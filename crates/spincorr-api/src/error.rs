//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Responses carry a JSON body with a machine-readable code and a
//! human-readable message; internal details are logged but never
//! returned to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Application-level error type for the artifact service.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Unknown artifact name or absent artifact (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Artifact exists but could not be served (500). The message is
    /// logged, not returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            Self::NotFound(msg) => msg.clone(),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "internal error serving artifact");
                "internal error".to_string()
            }
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };
        (status, Json(body)).into_response()
    }
}
