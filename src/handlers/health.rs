//! Health check handlers
//!
//! Reports whether the Ollama upstream is reachable

use crate::handlers::AppState;
use crate::models::refactor::HealthResponse;
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{debug, warn};

/// Upstream health check
///
/// GET /health
/// 200 with the configured model when `/api/tags` answers 200, whatever the body; otherwise 503
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<HealthResponse>) {
    debug!("Executing health check");

    let timeout = state.settings.ollama.health_timeout();
    match state.refactor.provider().ping(timeout).await {
        Ok(_) => (
            StatusCode::OK,
            Json(HealthResponse::ok(state.refactor.model())),
        ),
        Err(e) => {
            warn!("Health check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, Json(HealthResponse::error()))
        }
    }
}
