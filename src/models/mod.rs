//! Data models module
//!
//! Defines request and response data structures for the refactor API and the Ollama upstream

pub mod ollama;
pub mod refactor;

pub use ollama::{GenerateRequest, GenerateResponse, ModelTag, TagsResponse};
pub use refactor::{
    BatchItem, BatchRefactorRequest, BatchRefactorResult, HealthResponse, RefactorRequest,
    RefactorResult, REFACTOR_SUMMARY,
};
