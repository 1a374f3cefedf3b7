// PII Analysis Service Implementations

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::common::pii::{
    clean_entities, AnalyzeOptions, AnalyzerEngine, EntityType, RecognizerResult,
};
use crate::kernel::traits::BasePiiAnalyzer;

// =============================================================================
// Pattern PII Analyzer (regex recognizers)
// =============================================================================

/// Analyzer backed by the in-process recognizer registry
pub struct PatternPiiAnalyzer {
    engine: Arc<AnalyzerEngine>,
}

impl PatternPiiAnalyzer {
    pub fn new(engine: AnalyzerEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}

impl Default for PatternPiiAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerEngine::default())
    }
}

#[async_trait]
impl BasePiiAnalyzer for PatternPiiAnalyzer {
    async fn analyze(&self, text: &str, options: &AnalyzeOptions) -> Result<Vec<RecognizerResult>> {
        let results = self.engine.analyze(text, options)?;
        let raw_count = results.len();
        let cleaned = clean_entities(results);

        tracing::debug!(
            raw = raw_count,
            cleaned = cleaned.len(),
            "PII analysis complete"
        );

        Ok(cleaned)
    }

    fn supported_entities(&self) -> Vec<EntityType> {
        self.engine.registry().supported_entities()
    }

    fn recognizer_count(&self) -> usize {
        self.engine.registry().len()
    }
}

// =============================================================================
// No-op Analyzer (for testing or when detection is disabled)
// =============================================================================

/// No-op analyzer that never detects PII
/// Used when PII detection is disabled via config
pub struct NoopPiiAnalyzer;

impl NoopPiiAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoopPiiAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BasePiiAnalyzer for NoopPiiAnalyzer {
    async fn analyze(&self, _text: &str, _options: &AnalyzeOptions) -> Result<Vec<RecognizerResult>> {
        Ok(Vec::new())
    }

    fn supported_entities(&self) -> Vec<EntityType> {
        Vec::new()
    }

    fn recognizer_count(&self) -> usize {
        0
    }
}

// =============================================================================
// Factory function
// =============================================================================

/// Create PII analyzer based on configuration
pub fn create_pii_analyzer(enabled: bool) -> Arc<dyn BasePiiAnalyzer> {
    if !enabled {
        tracing::info!("PII detection disabled");
        return Arc::new(NoopPiiAnalyzer::new());
    }

    let analyzer = PatternPiiAnalyzer::default();
    tracing::info!(
        recognizers = analyzer.recognizer_count(),
        "PII detection enabled with pattern recognizers"
    );
    Arc::new(analyzer)
}
