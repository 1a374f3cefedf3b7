// Rate limiting middleware using tower-governor
//
// Configuration:
// - RATE_LIMIT_PER_SECOND requests per second per IP, bursts up to RATE_LIMIT_BURST
// - Keyed on X-Forwarded-For / X-Real-IP / peer address
// - Applied in app.rs to the analysis routes only; /health is never limited

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};

use crate::config::Config;

/// Wrap every route currently on `router` with a per-IP rate limit
pub fn apply_rate_limit(router: Router, config: &Config) -> Result<Router> {
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(SmartIpKeyExtractor)
            .per_millisecond(replenish_interval_ms(config.rate_limit_per_second))
            .burst_size(config.rate_limit_burst)
            .use_headers()
            .finish()
            .context("Rate limiter configuration rejected")?,
    );

    Ok(router.layer(GovernorLayer {
        config: governor_config,
    }))
}

/// Milliseconds between quota refills for a rate of `per_second` requests
fn replenish_interval_ms(per_second: u64) -> u64 {
    (1000 / per_second.max(1)).max(1)
}
