//! Recognizers for Indian identity documents and generic organization IDs.
//!
//! These are plain pattern recognizers: no validation, no context words.

use super::entity::EntityType;
use super::recognizer::{Pattern, PatternRecognizer};

/// PAN: five letters, four digits, one letter (ABCDE1234F)
pub fn pan_recognizer() -> PatternRecognizer {
    PatternRecognizer::new(
        "PanRecognizer",
        EntityType::Pan,
        vec![Pattern::new("PAN", r"\b[A-Z]{5}[0-9]{4}[A-Z]\b", 0.9)],
    )
}

/// Aadhaar: twelve digits in space-separated groups of four
pub fn aadhaar_recognizer() -> PatternRecognizer {
    PatternRecognizer::new(
        "AadhaarRecognizer",
        EntityType::Aadhaar,
        vec![Pattern::new("AADHAAR", r"\b\d{4}\s\d{4}\s\d{4}\b", 0.85)],
    )
}

/// Voter ID (EPIC): three letters followed by seven digits
pub fn voter_id_recognizer() -> PatternRecognizer {
    PatternRecognizer::new(
        "VoterIdRecognizer",
        EntityType::VoterId,
        vec![Pattern::new("VOTER_ID", r"\b[A-Z]{3}[0-9]{7}\b", 0.8)],
    )
}

/// Generic organization identifiers.
///
/// Matches ORG12345, EMP-90876, COMP_00123, STAFF99, ID-778899.
pub fn org_id_recognizer() -> PatternRecognizer {
    PatternRecognizer::new(
        "OrgIdRecognizer",
        EntityType::OrgId,
        vec![Pattern::new(
            "ORG_ID_GENERIC",
            r"\b[A-Z]{2,10}[-_ ]?\d{2,10}\b",
            0.8,
        )],
    )
}

/// All four custom recognizers, in registration order
pub fn custom_recognizers() -> Vec<PatternRecognizer> {
    vec![
        pan_recognizer(),
        aadhaar_recognizer(),
        voter_id_recognizer(),
        org_id_recognizer(),
    ]
}
