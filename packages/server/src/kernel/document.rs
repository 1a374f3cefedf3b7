// Document extraction service implementation

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::common::pdf::{extract_text, ExtractedDocument};
use crate::kernel::traits::BaseDocumentExtractor;

/// PDF extractor backed by lopdf.
///
/// Parsing is CPU-bound, so it runs on the blocking thread pool.
pub struct LopdfExtractor;

impl LopdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LopdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseDocumentExtractor for LopdfExtractor {
    async fn extract(&self, bytes: Vec<u8>) -> Result<ExtractedDocument> {
        let document = tokio::task::spawn_blocking(move || extract_text(&bytes))
            .await
            .context("PDF extraction task panicked")??;
        Ok(document)
    }
}
