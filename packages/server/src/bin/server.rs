//! PII Shield API Server
//!
//! Serves the detection, masking and PDF upload endpoints over HTTP.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use pii_core::kernel::ServerDeps;
use pii_core::server::build_app;
use pii_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pii_core=debug,tower_http=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting PII Shield API");

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        detection_enabled = config.pii_detection_enabled,
        default_threshold = config.default_threshold,
        max_upload_bytes = config.max_upload_bytes,
        rate_limit_enabled = config.rate_limit_enabled,
        "Configuration loaded"
    );

    let deps = ServerDeps::from_config(&config);
    tracing::info!(
        recognizers = deps.analyzer.recognizer_count(),
        "PII analyzer ready"
    );

    let app = build_app(&config, deps).context("Failed to build application")?;

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
