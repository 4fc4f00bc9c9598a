//! Error handling module
//!
//! Defines error types and handling logic used in the project

use crate::providers::UpstreamError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Remediation hint returned when Ollama cannot be reached from `/refactor`
pub const OLLAMA_NOT_RUNNING_HINT: &str = "Ollama not running. Start Ollama first: ollama serve";

/// Message returned when Ollama cannot be reached from `/batch-refactor`
pub const OLLAMA_NOT_RUNNING: &str = "Ollama not running";

/// Application error types
///
/// The `Display` text of each variant is exactly what clients see in `{"error": ...}`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request validation failed
    #[error("{0}")]
    Validation(String),

    /// Upstream could not be reached
    #[error("{0}")]
    ServiceUnavailable(String),

    /// Upstream answered with a non-success status
    #[error("Ollama error: {status}")]
    UpstreamStatus { status: u16 },

    /// Internal server error
    #[error("{0}")]
    Internal(String),
}

/// Error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::UpstreamStatus { .. } | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Convert to the JSON error body
    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
        }
    }

    /// Map a failed single refactor
    ///
    /// Unreachable upstream gets the remediation hint and anything unexpected
    /// is prefixed with `Server error:`.
    pub fn from_refactor_failure(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Unavailable(_) => {
                AppError::ServiceUnavailable(OLLAMA_NOT_RUNNING_HINT.to_string())
            }
            UpstreamError::Status { status, .. } => AppError::UpstreamStatus { status },
            other => AppError::Internal(format!("Server error: {}", other)),
        }
    }

    /// Map a failure that aborted a batch refactor
    ///
    /// Non-success statuses never reach here; they fall back per item.
    pub fn from_batch_failure(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Unavailable(_) => {
                AppError::ServiceUnavailable(OLLAMA_NOT_RUNNING.to_string())
            }
            other => AppError::Internal(other.to_string()),
        }
    }
}

/// Implement IntoResponse trait to allow errors to be returned directly as HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Application error: {} - Status code: {}", self, status);
        } else {
            tracing::warn!("Client error: {} - Status code: {}", self, status);
        }

        (status, Json(self.to_error_response())).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
