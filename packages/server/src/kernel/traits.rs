// Service traits for the kernel
//
// Handlers depend on these abstractions so tests can swap implementations.

use anyhow::Result;
use async_trait::async_trait;

use crate::common::pdf::ExtractedDocument;
use crate::common::pii::{AnalyzeOptions, EntityType, RecognizerResult};

// =============================================================================
// PII Analysis
// =============================================================================

#[async_trait]
pub trait BasePiiAnalyzer: Send + Sync {
    /// Detect PII in text. Results are already cleaned of shadowed matches.
    async fn analyze(&self, text: &str, options: &AnalyzeOptions) -> Result<Vec<RecognizerResult>>;

    /// Entity types this analyzer can report
    fn supported_entities(&self) -> Vec<EntityType>;

    /// Number of recognizers backing this analyzer
    fn recognizer_count(&self) -> usize;
}

// =============================================================================
// Document Extraction
// =============================================================================

#[async_trait]
pub trait BaseDocumentExtractor: Send + Sync {
    /// Turn an uploaded document into plain text
    async fn extract(&self, bytes: Vec<u8>) -> Result<ExtractedDocument>;
}
