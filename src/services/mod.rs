//! Service layer module
//!
//! Contains the refactor service and the startup warmup step

pub mod refactor;
pub mod warmup;

pub use refactor::{build_prompt, clean_response, RefactorService, RESPONSE_DELIMITER};
pub use warmup::{warmup, WarmupReport};
