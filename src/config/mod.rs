//! Configuration management module
//!
//! Responsible for loading and managing application configuration from defaults,
//! an optional JSON file and environment variables

pub mod file;
pub mod settings;

pub use settings::{
    LoggingConfig, OllamaConfig, RequestConfig, SecurityConfig, ServerConfig, Settings,
};
