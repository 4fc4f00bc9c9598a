//! Startup warmup
//!
//! Makes Ollama load the model before real traffic arrives so the first
//! refactor does not hit a cold start. Best effort: nothing here fails.

use crate::config::OllamaConfig;
use crate::models::ollama::GenerateRequest;
use crate::providers::Provider;
use tracing::{debug, info, warn};

/// Outcome of a warmup run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WarmupReport {
    /// Model listing answered
    pub upstream_reachable: bool,
    /// Warmup generate completed
    pub model_loaded: bool,
}

/// Probe the model listing, then run one throwaway generate
///
/// The generate step runs even if the probe failed. No retries.
pub async fn warmup(provider: &dyn Provider, config: &OllamaConfig) -> WarmupReport {
    let mut report = WarmupReport::default();

    match provider.list_models(config.warmup_probe_timeout()).await {
        Ok(tags) => {
            debug!("Ollama tags reachable, models: {:?}", tags.model_names());
            report.upstream_reachable = true;
        }
        Err(e) => warn!("Could not reach Ollama tags endpoint: {}", e),
    }

    info!("Warming up model {} (first generate may take a while)...", config.model);
    let request = GenerateRequest::new(config.model.as_str(), config.warmup_prompt.as_str());
    match provider.generate(&request, config.warmup_timeout()).await {
        Ok(_) => {
            info!("Warmup complete");
            report.model_loaded = true;
        }
        Err(e) => warn!("Warmup failed (will continue anyway): {}", e),
    }

    report
}
