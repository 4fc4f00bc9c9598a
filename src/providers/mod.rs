//! Provider module
//!
//! Defines the Provider trait and the Ollama implementation

pub mod ollama;

use crate::models::ollama::{GenerateRequest, GenerateResponse, TagsResponse};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Failure talking to the inference upstream
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Connection refused or host unreachable
    #[error("Connection to Ollama failed: {0}")]
    Unavailable(String),

    /// Upstream answered with something other than 200
    #[error("Ollama returned status {status}")]
    Status { status: u16, body: String },

    /// Call exceeded its timeout
    #[error("Ollama request timed out")]
    Timeout,

    /// Any other transport failure
    #[error("Ollama request failed: {0}")]
    Request(String),

    /// 200 response whose body could not be decoded
    #[error("Invalid Ollama response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        // A connect timeout is still a connection failure
        if err.is_connect() {
            UpstreamError::Unavailable(err.to_string())
        } else if err.is_timeout() {
            UpstreamError::Timeout
        } else if err.is_decode() {
            UpstreamError::Decode(err.to_string())
        } else {
            UpstreamError::Request(err.to_string())
        }
    }
}

/// Provider trait for the inference upstream
///
/// Exposes the two capabilities the proxy needs: text generation and model
/// listing. Every call carries its own timeout.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &str;

    /// Run a non-streaming generation
    async fn generate(
        &self,
        request: &GenerateRequest,
        timeout: Duration,
    ) -> Result<GenerateResponse, UpstreamError>;

    /// List locally available models
    async fn list_models(&self, timeout: Duration) -> Result<TagsResponse, UpstreamError>;

    /// Liveness probe; only the status code matters, the body is ignored
    async fn ping(&self, timeout: Duration) -> Result<(), UpstreamError>;
}

pub use ollama::OllamaProvider;
