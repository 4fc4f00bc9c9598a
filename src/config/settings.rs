//! Application configuration settings
//!
//! Defines all configuration structures and loading logic

use crate::config::file;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Server configuration
    pub server: ServerConfig,
    /// Ollama upstream configuration
    pub ollama: OllamaConfig,
    /// Request configuration
    pub request: RequestConfig,
    /// Security configuration
    pub security: SecurityConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen host
    pub host: String,
    /// Listen port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

/// Ollama upstream configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OllamaConfig {
    /// Upstream base URL
    pub base_url: String,
    /// Model identifier sent with every generate call
    pub model: String,
    /// Sampling temperature for refactor calls
    pub temperature: f32,
    /// Generate timeout in seconds
    pub request_timeout: u64,
    /// Warmup generate timeout in seconds
    pub warmup_timeout: u64,
    /// Warmup model-listing probe timeout in seconds
    pub warmup_probe_timeout: u64,
    /// Health check timeout in seconds
    pub health_timeout: u64,
    /// Prompt used to load the model at startup
    pub warmup_prompt: String,
    /// Whether the warmup runs before serving
    pub warmup_enabled: bool,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "neural-chat".to_string(),
            temperature: 0.3,
            request_timeout: 180,
            warmup_timeout: 180,
            warmup_probe_timeout: 5,
            health_timeout: 2,
            warmup_prompt: "Reply with 'ready'".to_string(),
            warmup_enabled: true,
        }
    }
}

impl OllamaConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    pub fn warmup_timeout(&self) -> Duration {
        Duration::from_secs(self.warmup_timeout)
    }

    pub fn warmup_probe_timeout(&self) -> Duration {
        Duration::from_secs(self.warmup_probe_timeout)
    }

    pub fn health_timeout(&self) -> Duration {
        Duration::from_secs(self.health_timeout)
    }
}

/// Request configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestConfig {
    /// Maximum request size in bytes
    pub max_request_size: usize,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            max_request_size: 10 * 1024 * 1024,
        }
    }
}

/// Security configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Whether CORS is enabled
    pub cors_enabled: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self { cors_enabled: true }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl Settings {
    /// Create a new configuration instance
    ///
    /// Layers, lowest precedence first: built-in defaults, the optional JSON
    /// config file, then environment variables.
    pub fn new() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let mut settings = match file::find_config_file() {
            Some(path) => {
                info!("Loading configuration from: {:?}", path);
                file::load(&path)?
            }
            None => Settings::default(),
        };

        settings.apply_overrides(|key| std::env::var(key).ok())?;
        settings.validate()?;

        Ok(settings)
    }

    /// Apply overrides from a key lookup (environment variables in production)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        override_from(&lookup, "SERVER_HOST", &mut self.server.host)?;
        override_from(&lookup, "SERVER_PORT", &mut self.server.port)?;

        override_from(&lookup, "OLLAMA_BASE_URL", &mut self.ollama.base_url)?;
        override_from(&lookup, "OLLAMA_MODEL", &mut self.ollama.model)?;
        override_from(&lookup, "OLLAMA_TEMPERATURE", &mut self.ollama.temperature)?;
        override_from(&lookup, "REQUEST_TIMEOUT", &mut self.ollama.request_timeout)?;
        override_from(&lookup, "WARMUP_TIMEOUT", &mut self.ollama.warmup_timeout)?;
        override_from(&lookup, "WARMUP_PROBE_TIMEOUT", &mut self.ollama.warmup_probe_timeout)?;
        override_from(&lookup, "HEALTH_TIMEOUT", &mut self.ollama.health_timeout)?;
        override_from(&lookup, "WARMUP_PROMPT", &mut self.ollama.warmup_prompt)?;
        override_from(&lookup, "WARMUP_ENABLED", &mut self.ollama.warmup_enabled)?;

        override_from(&lookup, "MAX_REQUEST_SIZE", &mut self.request.max_request_size)?;
        override_from(&lookup, "CORS_ENABLED", &mut self.security.cors_enabled)?;

        override_from(&lookup, "RUST_LOG", &mut self.logging.level)?;
        override_from(&lookup, "LOG_FORMAT", &mut self.logging.format)?;

        self.ollama.base_url = self.ollama.base_url.trim_end_matches('/').to_string();

        Ok(())
    }

    /// Validate configuration validity
    pub fn validate(&self) -> Result<()> {
        // Validate port range
        if self.server.port == 0 {
            anyhow::bail!("Port number cannot be 0");
        }

        // Validate URL format
        if !self.ollama.base_url.starts_with("http") {
            anyhow::bail!("Invalid Ollama base URL format, should start with 'http'");
        }

        if self.ollama.model.trim().is_empty() {
            anyhow::bail!("Ollama model cannot be empty");
        }

        if !(0.0..=2.0).contains(&self.ollama.temperature) {
            anyhow::bail!("Temperature must be between 0 and 2, got {}", self.ollama.temperature);
        }

        // Validate timeout values
        if self.ollama.request_timeout == 0
            || self.ollama.warmup_timeout == 0
            || self.ollama.warmup_probe_timeout == 0
            || self.ollama.health_timeout == 0
        {
            anyhow::bail!("Timeout values cannot be 0");
        }

        // Validate request size limit
        if self.request.max_request_size == 0 {
            anyhow::bail!("Maximum request size cannot be 0");
        }

        // Validate log level
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            anyhow::bail!("Invalid log level: {}", self.logging.level);
        }

        // Validate log format
        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Ok(())
    }

    /// Listen address in `host:port` form
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Replace `target` with the parsed value of `key`, if present
fn override_from<F, T>(lookup: &F, key: &str, target: &mut T) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    if let Some(raw) = lookup(key) {
        *target = raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {}: {:?}", key, raw))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.listen_addr(), "0.0.0.0:8000");
        assert_eq!(settings.ollama.request_timeout(), Duration::from_secs(180));
        assert_eq!(settings.ollama.health_timeout(), Duration::from_secs(2));
    }

    #[test]
    fn test_overrides_strip_trailing_slash() {
        let mut settings = Settings::default();
        settings
            .apply_overrides(lookup_from(&[("OLLAMA_BASE_URL", "http://gpu-box:11434/")]))
            .unwrap();
        assert_eq!(settings.ollama.base_url, "http://gpu-box:11434");
    }

    #[test]
    fn test_unparseable_override_names_the_key() {
        let mut settings = Settings::default();
        let err = settings
            .apply_overrides(lookup_from(&[("WARMUP_ENABLED", "sometimes")]))
            .unwrap_err();
        assert!(err.to_string().contains("WARMUP_ENABLED"));
    }
}
