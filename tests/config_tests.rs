//! Configuration module unit tests

use refactor_proxy::config::{file, Settings};
use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

/// Build a lookup over fixed key/value pairs
fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn test_default_settings() {
    let settings = Settings::default();

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 8000);
    assert_eq!(settings.ollama.base_url, "http://localhost:11434");
    assert_eq!(settings.ollama.model, "neural-chat");
    assert_eq!(settings.ollama.temperature, 0.3);
    assert_eq!(settings.ollama.request_timeout, 180);
    assert_eq!(settings.ollama.warmup_timeout, 180);
    assert_eq!(settings.ollama.warmup_probe_timeout, 5);
    assert_eq!(settings.ollama.health_timeout, 2);
    assert_eq!(settings.ollama.warmup_prompt, "Reply with 'ready'");
    assert!(settings.ollama.warmup_enabled);
    assert!(settings.security.cors_enabled);
    assert_eq!(settings.logging.level, "info");
    assert_eq!(settings.logging.format, "text");
}

#[test]
fn test_environment_overrides() {
    let mut settings = Settings::default();
    settings
        .apply_overrides(lookup(&[
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "8123"),
            ("OLLAMA_BASE_URL", "http://ollama:11434"),
            ("OLLAMA_MODEL", "codellama:7b"),
            ("OLLAMA_TEMPERATURE", "0.1"),
            ("REQUEST_TIMEOUT", "60"),
            ("WARMUP_ENABLED", "false"),
            ("LOG_FORMAT", "json"),
        ]))
        .unwrap();

    assert!(settings.validate().is_ok());
    assert_eq!(settings.listen_addr(), "127.0.0.1:8123");
    assert_eq!(settings.ollama.base_url, "http://ollama:11434");
    assert_eq!(settings.ollama.model, "codellama:7b");
    assert_eq!(settings.ollama.temperature, 0.1);
    assert_eq!(settings.ollama.request_timeout, 60);
    assert!(!settings.ollama.warmup_enabled);
    assert_eq!(settings.logging.format, "json");
    // Untouched values stay at their defaults
    assert_eq!(settings.ollama.health_timeout, 2);
}

#[test]
fn test_invalid_port_value() {
    let mut settings = Settings::default();
    let result = settings.apply_overrides(lookup(&[("SERVER_PORT", "eighty")]));

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("SERVER_PORT"));
}

#[test]
fn test_validation_failures() {
    let cases: Vec<(&str, &str, &str)> = vec![
        ("SERVER_PORT", "0", "Port number cannot be 0"),
        ("OLLAMA_BASE_URL", "localhost:11434", "should start with 'http'"),
        ("OLLAMA_MODEL", "  ", "model cannot be empty"),
        ("OLLAMA_TEMPERATURE", "3.5", "Temperature"),
        ("HEALTH_TIMEOUT", "0", "Timeout values cannot be 0"),
        ("MAX_REQUEST_SIZE", "0", "Maximum request size cannot be 0"),
        ("RUST_LOG", "verbose", "Invalid log level"),
        ("LOG_FORMAT", "yaml", "Invalid log format"),
    ];

    for (key, value, expected) in cases {
        let mut settings = Settings::default();
        settings.apply_overrides(lookup(&[(key, value)])).unwrap();

        let error = settings.validate().unwrap_err();
        assert!(
            error.to_string().contains(expected),
            "{}={} gave: {}",
            key,
            value,
            error
        );
    }
}

#[test]
fn test_file_then_environment_precedence() {
    let mut file_handle = NamedTempFile::new().unwrap();
    file_handle
        .write_all(
            br#"{
                "ollama": {
                    "base_url": "http://file-host:11434/",
                    "model": "from-file",
                    "warmup_prompt": "hi"
                },
                "logging": { "level": "debug" }
            }"#,
        )
        .unwrap();

    let mut settings = file::load(file_handle.path()).unwrap();
    settings
        .apply_overrides(lookup(&[("OLLAMA_MODEL", "from-env")]))
        .unwrap();

    assert!(settings.validate().is_ok());
    assert_eq!(settings.ollama.model, "from-env");
    assert_eq!(settings.ollama.base_url, "http://file-host:11434");
    assert_eq!(settings.ollama.warmup_prompt, "hi");
    assert_eq!(settings.logging.level, "debug");
    assert_eq!(settings.server.port, 8000);
}
