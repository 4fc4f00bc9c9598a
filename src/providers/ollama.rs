//! Ollama Provider implementation
//!
//! Talks to a local Ollama server over its native HTTP API

use super::{Provider, UpstreamError};
use crate::models::ollama::{GenerateRequest, GenerateResponse, TagsResponse};
use crate::utils::logging::preview;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, error};

/// Ollama Provider
#[derive(Debug, Clone)]
pub struct OllamaProvider {
    client: Client,
    base_url: String,
}

impl OllamaProvider {
    /// Create a provider for the server at `base_url`
    ///
    /// No client-wide timeout is set; each call supplies its own.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("refactor-proxy/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn anything but 200 into `UpstreamError::Status`, logging the body
    async fn ensure_ok(response: Response, endpoint: &str) -> Result<Response, UpstreamError> {
        let status = response.status();
        if status == StatusCode::OK {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        error!("Ollama {} returned {}: {}", endpoint, status, preview(&body));

        Err(UpstreamError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl Provider for OllamaProvider {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn generate(
        &self,
        request: &GenerateRequest,
        timeout: Duration,
    ) -> Result<GenerateResponse, UpstreamError> {
        let url = self.url("/api/generate");
        debug!("Calling Ollama at {} with model {}", url, request.model);

        let response = self
            .client
            .post(&url)
            .timeout(timeout)
            .json(request)
            .send()
            .await?;

        debug!("Ollama response status: {}", response.status());
        let response = Self::ensure_ok(response, "/api/generate").await?;

        Ok(response.json::<GenerateResponse>().await?)
    }

    async fn list_models(&self, timeout: Duration) -> Result<TagsResponse, UpstreamError> {
        let url = self.url("/api/tags");

        let response = self.client.get(&url).timeout(timeout).send().await?;
        let response = Self::ensure_ok(response, "/api/tags").await?;

        let tags = response.json::<TagsResponse>().await?;
        debug!("Ollama lists {} models", tags.models.len());
        Ok(tags)
    }

    async fn ping(&self, timeout: Duration) -> Result<(), UpstreamError> {
        let response = self
            .client
            .get(self.url("/api/tags"))
            .timeout(timeout)
            .send()
            .await?;
        Self::ensure_ok(response, "/api/tags").await?;
        Ok(())
    }
}
