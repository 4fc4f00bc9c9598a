//! Client-facing refactor API models

use serde::{Deserialize, Serialize};

/// Change summary returned with every single refactor
///
/// Static text, not derived from the snippet.
pub const REFACTOR_SUMMARY: [&str; 3] = [
    "Code structure improved",
    "Type safety enhanced",
    "Best practices applied",
];

/// `POST /refactor` body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RefactorRequest {
    /// Absent and `null` are treated like an empty snippet
    #[serde(default)]
    pub code: Option<String>,
}

/// `POST /batch-refactor` body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchRefactorRequest {
    #[serde(default)]
    pub codes: Option<Vec<String>>,
}

/// `POST /refactor` success body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefactorResult {
    pub refactored: String,
    pub summary: Vec<String>,
}

impl RefactorResult {
    pub fn new(refactored: String) -> Self {
        Self {
            refactored,
            summary: REFACTOR_SUMMARY.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// One entry of a batch result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchItem {
    pub original: String,
    pub refactored: String,
}

/// `POST /batch-refactor` success body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchRefactorResult {
    pub results: Vec<BatchItem>,
    pub count: usize,
}

impl From<Vec<BatchItem>> for BatchRefactorResult {
    fn from(results: Vec<BatchItem>) -> Self {
        let count = results.len();
        Self { results, count }
    }
}

/// `GET /health` body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl HealthResponse {
    pub fn ok(model: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            model: Some(model.into()),
        }
    }

    pub fn error() -> Self {
        Self {
            status: "error".to_string(),
            model: None,
        }
    }
}
