//! Server dependencies for handlers (using traits for testability)
//!
//! This module provides the central dependency container shared by all routes.
//! All services use trait abstractions so tests can inject their own.

use std::sync::Arc;

use crate::config::Config;
use crate::kernel::document::LopdfExtractor;
use crate::kernel::pii::create_pii_analyzer;
use crate::kernel::{BaseDocumentExtractor, BasePiiAnalyzer};

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to handlers
#[derive(Clone)]
pub struct ServerDeps {
    pub analyzer: Arc<dyn BasePiiAnalyzer>,
    pub extractor: Arc<dyn BaseDocumentExtractor>,
    /// Threshold applied by /analyze when the request omits one
    pub default_threshold: f64,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(
        analyzer: Arc<dyn BasePiiAnalyzer>,
        extractor: Arc<dyn BaseDocumentExtractor>,
        default_threshold: f64,
    ) -> Self {
        Self {
            analyzer,
            extractor,
            default_threshold,
        }
    }

    /// Production dependencies derived from configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            create_pii_analyzer(config.pii_detection_enabled),
            Arc::new(LopdfExtractor::new()),
            config.default_threshold,
        )
    }
}
