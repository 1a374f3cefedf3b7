//! PDF text extraction.
//!
//! Pages are read in page-number order. Each page that yields text
//! contributes that text followed by a newline, so offsets reported by the
//! analyzer refer to the concatenated document.

pub mod extractor;
pub mod testing;

pub use extractor::{extract_text, ExtractedDocument, PdfError};
