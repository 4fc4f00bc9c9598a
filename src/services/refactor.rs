//! Refactor service
//!
//! Builds prompts, calls the upstream and cleans up generated text

use crate::config::OllamaConfig;
use crate::models::ollama::GenerateRequest;
use crate::models::refactor::BatchItem;
use crate::providers::{Provider, UpstreamError};
use crate::utils::logging::preview;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Marker after which generated text is discarded
pub const RESPONSE_DELIMITER: &str = "###";

/// Wrap a snippet in the refactor instruction
pub fn build_prompt(code: &str) -> String {
    format!(
        "Refactor this code for clarity and best practices. Return only the refactored code.\n\
         \n\
         Code:\n\
         {}\n\
         \n\
         Refactored:",
        code
    )
}

/// Trim generated text and cut it at the first delimiter
pub fn clean_response(text: &str) -> String {
    let text = text.trim();
    match text.find(RESPONSE_DELIMITER) {
        Some(idx) => text[..idx].trim().to_string(),
        None => text.to_string(),
    }
}

/// Forwards refactor requests to the upstream provider
#[derive(Clone)]
pub struct RefactorService {
    provider: Arc<dyn Provider>,
    model: String,
    temperature: f32,
    timeout: Duration,
}

impl RefactorService {
    pub fn new(provider: Arc<dyn Provider>, config: &OllamaConfig) -> Self {
        Self {
            provider,
            model: config.model.clone(),
            temperature: config.temperature,
            timeout: config.request_timeout(),
        }
    }

    pub fn provider(&self) -> &Arc<dyn Provider> {
        &self.provider
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn generate_request(&self, code: &str) -> GenerateRequest {
        GenerateRequest::new(self.model.as_str(), build_prompt(code))
            .with_temperature(self.temperature)
    }

    /// Refactor one snippet
    ///
    /// `code` is used as the fallback text when the upstream omits `response`.
    /// Any upstream failure, including a non-200 status, is returned.
    pub async fn refactor(&self, code: &str) -> Result<String, UpstreamError> {
        debug!("Refactoring snippet: {}", preview(code));

        let request = self.generate_request(code);
        let response = self.provider.generate(&request, self.timeout).await?;
        let text = response.response.as_deref().unwrap_or(code);

        Ok(clean_response(text))
    }

    /// Refactor snippets one after another, in input order
    ///
    /// A non-200 status for one snippet falls back to the original text.
    /// Any other failure aborts the whole batch.
    pub async fn refactor_batch(&self, codes: &[String]) -> Result<Vec<BatchItem>, UpstreamError> {
        info!("Refactoring batch of {} snippets", codes.len());

        let mut results = Vec::with_capacity(codes.len());
        for (idx, code) in codes.iter().enumerate() {
            let refactored = match self.refactor(code).await {
                Ok(text) => text,
                Err(UpstreamError::Status { status, .. }) => {
                    warn!("Batch item {} kept unchanged, Ollama returned {}", idx, status);
                    code.clone()
                }
                Err(e) => return Err(e),
            };

            results.push(BatchItem {
                original: code.clone(),
                refactored,
            });
        }

        Ok(results)
    }
}
