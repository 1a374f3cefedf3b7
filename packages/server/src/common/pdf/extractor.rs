use lopdf::Document;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Uploaded file is empty")]
    Empty,

    #[error("Failed to parse PDF: {0}")]
    Parse(#[from] lopdf::Error),

    #[error("Encrypted PDFs are not supported")]
    Encrypted,
}

/// Text pulled out of a PDF document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedDocument {
    /// Concatenated page texts, each followed by `\n`
    pub text: String,
    pub page_count: usize,
    pub pages_with_text: usize,
}

impl ExtractedDocument {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Extract the text of every page of an in-memory PDF
pub fn extract_text(bytes: &[u8]) -> Result<ExtractedDocument, PdfError> {
    if bytes.is_empty() {
        return Err(PdfError::Empty);
    }

    let document = Document::load_mem(bytes)?;
    if document.is_encrypted() {
        return Err(PdfError::Encrypted);
    }

    let pages = document.get_pages();
    let mut extracted = ExtractedDocument {
        page_count: pages.len(),
        ..ExtractedDocument::default()
    };

    // BTreeMap keys iterate in page-number order
    for page_number in pages.keys() {
        let page_text = match document.extract_text(&[*page_number]) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(page = page_number, error = %e, "Skipping unreadable PDF page");
                continue;
            }
        };

        let page_text = page_text.trim_end_matches('\n');
        if page_text.trim().is_empty() {
            continue;
        }

        extracted.text.push_str(page_text);
        extracted.text.push('\n');
        extracted.pages_with_text += 1;
    }

    tracing::debug!(
        pages = extracted.page_count,
        pages_with_text = extracted.pages_with_text,
        chars = extracted.text.chars().count(),
        "Extracted PDF text"
    );

    Ok(extracted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::pdf::testing::{encrypted_pdf, pdf_with_unreadable_page, text_pdf};

    #[test]
    fn test_extracts_lines_from_single_page() {
        let pdf = text_pdf(&[&["CONFIDENTIAL DOCUMENT", "Voter ID: ABC1234567"]]);
        let doc = extract_text(&pdf).unwrap();

        assert_eq!(doc.page_count, 1);
        assert_eq!(doc.pages_with_text, 1);
        assert!(doc.text.contains("CONFIDENTIAL DOCUMENT"));
        assert!(doc.text.contains("ABC1234567"));
        assert!(doc.text.ends_with('\n'));
    }

    #[test]
    fn test_pages_in_order_and_blank_pages_skipped() {
        let pdf = text_pdf(&[&["first page"], &[], &["third page"]]);
        let doc = extract_text(&pdf).unwrap();

        assert_eq!(doc.page_count, 3);
        assert_eq!(doc.pages_with_text, 2);
        let first = doc.text.find("first page").unwrap();
        let third = doc.text.find("third page").unwrap();
        assert!(first < third);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(extract_text(&[]), Err(PdfError::Empty)));
    }

    #[test]
    fn test_not_a_pdf() {
        let result = extract_text(b"definitely not a pdf");
        assert!(matches!(result, Err(PdfError::Parse(_))));
    }

    #[test]
    fn test_unreadable_page_is_skipped() {
        let pdf = pdf_with_unreadable_page(
            &[&["Email: rajesh@example.in"], &[], &["Voter ID: ABC1234567"]],
            1,
        );
        let doc = extract_text(&pdf).unwrap();

        assert_eq!(doc.page_count, 3);
        assert_eq!(doc.pages_with_text, 2);
        assert!(doc.text.contains("rajesh@example.in"));
        assert!(doc.text.contains("ABC1234567"));
        assert!(!doc.text.contains("lost"));
    }

    #[test]
    fn test_encrypted_document() {
        assert!(matches!(extract_text(&encrypted_pdf()), Err(PdfError::Encrypted)));
    }
}
