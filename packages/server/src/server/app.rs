//! Application setup and server configuration.

use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{DefaultBodyLimit, Extension},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::kernel::ServerDeps;
use crate::server::middleware::{apply_rate_limit, extract_client_ip};
use crate::server::routes::{
    analyze_handler, health_handler, mask_handler, supported_entities_handler, upload_pdf_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub deps: Arc<ServerDeps>,
}

impl AxumAppState {
    pub fn new(deps: ServerDeps) -> Self {
        Self {
            deps: Arc::new(deps),
        }
    }
}

/// Build the Axum application router
///
/// Fails only when the rate limiter configuration is rejected.
pub fn build_app(config: &Config, deps: ServerDeps) -> Result<Router> {
    let app_state = AxumAppState::new(deps);

    // CORS configuration - the browser UI is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let mut router = Router::new()
        .route("/analyze", post(analyze_handler))
        .route("/mask", post(mask_handler))
        .route("/upload-pdf", post(upload_pdf_handler))
        .route("/supported-entities", get(supported_entities_handler));

    if config.rate_limit_enabled {
        tracing::info!(
            per_second = config.rate_limit_per_second,
            burst = config.rate_limit_burst,
            "Rate limiting enabled"
        );
        router = apply_rate_limit(router, config)?;
    }

    let app = router
        // Health check (no rate limit)
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(middleware::from_fn(extract_client_ip))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}
