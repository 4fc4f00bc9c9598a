//! HTTP handlers module
//!
//! Contains all HTTP endpoint handling logic

pub mod health;
pub mod refactor;

use crate::config::Settings;
use crate::middleware::logging::request_logging_middleware;
use crate::providers::Provider;
use crate::services::RefactorService;
use anyhow::Result;
use axum::{extract::DefaultBodyLimit, middleware, routing::get, routing::post, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub refactor: RefactorService,
}

/// Create application router
///
/// `provider` is the upstream every endpoint talks to; tests pass a stub or a
/// provider aimed at a mock server.
pub async fn create_router(settings: Settings, provider: Arc<dyn Provider>) -> Result<Router> {
    let refactor = RefactorService::new(provider, &settings.ollama);

    // Create application state
    let app_state = Arc::new(AppState {
        settings: settings.clone(),
        refactor,
    });

    // Create middleware stack
    let middleware_stack = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(settings.request.max_request_size));

    // Create routes
    let router = Router::new()
        .route("/health", get(health::health_check))
        .route("/refactor", post(refactor::handle_refactor))
        .route("/batch-refactor", post(refactor::handle_batch_refactor))
        .with_state(app_state)
        .layer(middleware_stack);

    let router = if settings.security.cors_enabled {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    };

    Ok(router)
}
