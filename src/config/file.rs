//! File-based configuration loading
//!
//! Loads an optional JSON settings file that sits underneath environment overrides

use crate::config::Settings;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "REFACTOR_PROXY_CONFIG";

/// Load settings from a JSON file
///
/// Sections and keys that are absent fall back to their defaults.
pub fn load(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let settings: Settings = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config JSON: {:?}", path))?;

    debug!("Loaded config file with model {}", settings.ollama.model);
    Ok(settings)
}

/// Locate the config file, if any
///
/// Searches in order:
/// 1. `$REFACTOR_PROXY_CONFIG`
/// 2. ~/.config/refactor-proxy/refactor-proxy.json
/// 3. ./refactor-proxy.json
pub fn find_config_file() -> Option<PathBuf> {
    if let Ok(explicit) = std::env::var(CONFIG_PATH_ENV) {
        // An explicit path is returned even if missing so the read error surfaces
        return Some(PathBuf::from(explicit));
    }

    if let Some(home) = dirs::home_dir() {
        let config_path = home
            .join(".config")
            .join("refactor-proxy")
            .join("refactor-proxy.json");
        if config_path.exists() {
            return Some(config_path);
        }
    }

    let local_path = Path::new("refactor-proxy.json");
    if local_path.exists() {
        return Some(local_path.to_path_buf());
    }

    None
}
