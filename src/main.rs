//! Refactor Proxy Server
//!
//! HTTP proxy that forwards code refactoring requests to a local Ollama server

use anyhow::{Context, Result};
use refactor_proxy::{
    create_router, utils::logging::init_logging, version_info, warmup, OllamaProvider, Provider,
    Settings,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load settings from defaults, optional config file and environment
    let settings = Settings::new().context("Failed to load server settings")?;

    init_logging(&settings.logging)?;
    info!("{}", version_info());
    info!(
        "Upstream: {} (model {})",
        settings.ollama.base_url, settings.ollama.model
    );

    let provider: Arc<dyn Provider> = Arc::new(
        OllamaProvider::new(settings.ollama.base_url.as_str())
            .context("Failed to create Ollama client")?,
    );

    // Load the model before accepting traffic
    if settings.ollama.warmup_enabled {
        let report = warmup(provider.as_ref(), &settings.ollama).await;
        info!(
            "Warmup finished - upstream reachable: {}, model loaded: {}",
            report.upstream_reachable, report.model_loaded
        );
    } else {
        info!("Warmup disabled");
    }

    let app = create_router(settings.clone(), provider).await?;

    let addr = settings.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("🚀 Refactor proxy started!");
    info!("📝 Health check:   GET  http://{}/health", addr);
    info!("🔄 Refactor:       POST http://{}/refactor", addr);
    info!("📦 Batch refactor: POST http://{}/batch-refactor", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to start server: {}", e))?;

    info!("Server stopped");
    Ok(())
}

/// Resolve on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
