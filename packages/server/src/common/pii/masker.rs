use serde::{Deserialize, Serialize};

use super::entity::EntityType;
use super::recognizer::RecognizerResult;

/// Strategy for masking detected PII
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskStrategy {
    /// Fixed-width placeholders for PAN, Aadhaar, IBAN and card numbers.
    /// Other entity types are left untouched.
    #[default]
    Fixed,
    /// Replace every entity with its type, e.g. `<EMAIL_ADDRESS>`
    #[serde(rename = "token")]
    TokenReplacement,
    /// Replace every entity with `[REDACTED]`
    #[serde(rename = "redact")]
    FullRemoval,
}

/// Result of a masking pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskOutcome {
    pub masked: String,
    /// Number of spans that were replaced
    pub applied: usize,
}

/// Placeholder used by [`MaskStrategy::Fixed`], `None` for unmasked types
pub fn fixed_mask(entity_type: EntityType) -> Option<&'static str> {
    match entity_type {
        EntityType::Pan => Some("XXXXXXXXXX"),
        EntityType::Aadhaar => Some("XXXX XXXX XXXX"),
        EntityType::IbanCode => Some("XXXXXXXXXXXXXXXXXXXX"),
        EntityType::CreditCard => Some("XXXX XXXX XXXX XXXX"),
        _ => None,
    }
}

fn replacement_for(entity_type: EntityType, strategy: MaskStrategy) -> Option<String> {
    match strategy {
        MaskStrategy::Fixed => fixed_mask(entity_type).map(str::to_string),
        MaskStrategy::TokenReplacement => Some(format!("<{}>", entity_type.as_str())),
        MaskStrategy::FullRemoval => Some("[REDACTED]".to_string()),
    }
}

/// Mask `results` in `text`.
///
/// Spans are replaced from the end of the text backwards so earlier offsets
/// stay valid. A span overlapping one already replaced is skipped.
pub fn mask_text(text: &str, results: &[RecognizerResult], strategy: MaskStrategy) -> MaskOutcome {
    let mut ordered: Vec<(&RecognizerResult, String)> = results
        .iter()
        .filter_map(|r| replacement_for(r.entity_type, strategy).map(|rep| (r, rep)))
        .collect();

    // Reverse order by start; on ties the wider span goes first
    ordered.sort_by(|(a, _), (b, _)| b.start.cmp(&a.start).then(b.end.cmp(&a.end)));

    let mut masked = text.to_string();
    let mut applied = 0;
    let mut lowest_replaced_start = usize::MAX;

    for (result, replacement) in ordered {
        if result.end > lowest_replaced_start {
            continue;
        }
        if result.end > text.len()
            || !text.is_char_boundary(result.start)
            || !text.is_char_boundary(result.end)
        {
            tracing::warn!(
                start = result.start,
                end = result.end,
                "Skipping span outside text boundaries"
            );
            continue;
        }

        masked.replace_range(result.start..result.end, &replacement);
        lowest_replaced_start = result.start;
        applied += 1;
    }

    MaskOutcome { masked, applied }
}
