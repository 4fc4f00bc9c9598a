//! Refactor handlers
//!
//! Single and batch refactor endpoints

use crate::handlers::AppState;
use crate::models::refactor::*;
use crate::utils::error::{AppError, AppResult};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Refactor one snippet
///
/// POST /refactor
pub async fn handle_refactor(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RefactorRequest>, JsonRejection>,
) -> AppResult<Json<RefactorResult>> {
    // Unreadable bodies take the catch-all branch
    let Json(request) =
        payload.map_err(|e| AppError::Internal(format!("Server error: {}", e.body_text())))?;

    let code = request.code.as_deref().unwrap_or_default().trim();
    if code.is_empty() {
        warn!("Refactor request without code");
        return Err(AppError::Validation("No code provided".to_string()));
    }

    let refactored = state
        .refactor
        .refactor(code)
        .await
        .map_err(AppError::from_refactor_failure)?;

    debug!("Refactor completed, {} chars returned", refactored.chars().count());
    Ok(Json(RefactorResult::new(refactored)))
}

/// Refactor several snippets sequentially
///
/// POST /batch-refactor
pub async fn handle_batch_refactor(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BatchRefactorRequest>, JsonRejection>,
) -> AppResult<Json<BatchRefactorResult>> {
    let Json(request) = payload.map_err(|e| AppError::Internal(e.body_text()))?;

    let codes = request.codes.unwrap_or_default();
    if codes.is_empty() {
        warn!("Batch refactor request without codes");
        return Err(AppError::Validation("No codes provided".to_string()));
    }

    let results = state
        .refactor
        .refactor_batch(&codes)
        .await
        .map_err(AppError::from_batch_failure)?;

    info!("Batch refactor completed, {} items", results.len());
    Ok(Json(BatchRefactorResult::from(results)))
}
