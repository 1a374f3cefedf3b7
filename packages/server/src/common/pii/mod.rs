/// PII (Personally Identifiable Information) detection and masking
///
/// This module scans free text for emails, phone numbers, card numbers,
/// IBANs, IP addresses, person names, locations and Indian identity numbers
/// (PAN, Aadhaar, Voter ID), plus generic organization IDs.
///
/// # Pipeline
///
/// 1. `AnalyzerEngine::analyze` runs every registered recognizer, boosts
///    scores on nearby context words and removes duplicate spans
/// 2. `clean_entities` drops Aadhaar matches shadowed by a card number
/// 3. `mask_text` rewrites the text according to a `MaskStrategy`
///
/// # Examples
///
/// ```rust
/// use pii_core::common::pii::{
///     clean_entities, mask_text, AnalyzeOptions, AnalyzerEngine, MaskStrategy,
/// };
///
/// let engine = AnalyzerEngine::default();
/// let text = "PAN: ABCDE1234F";
///
/// let results = clean_entities(engine.analyze(text, &AnalyzeOptions::default()).unwrap());
/// let outcome = mask_text(text, &results, MaskStrategy::Fixed);
/// assert_eq!(outcome.masked, "PAN: XXXXXXXXXX");
/// ```

pub mod analyzer;
pub mod cleaner;
pub mod custom;
pub mod entity;
pub mod masker;
pub mod predefined;
pub mod recognizer;
pub mod validators;

// Re-export main types and functions
pub use analyzer::{
    remove_duplicates, AnalyzeOptions, AnalyzerEngine, AnalyzerError, RecognizerRegistry,
    DEFAULT_LANGUAGE,
};
pub use cleaner::clean_entities;
pub use entity::{EntityType, UnknownEntityType};
pub use masker::{fixed_mask, mask_text, MaskOutcome, MaskStrategy};
pub use recognizer::{Pattern, PatternRecognizer, Recognizer, RecognizerResult};
