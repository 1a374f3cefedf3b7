use super::entity::EntityType;
use super::recognizer::RecognizerResult;

/// Post-process analyzer output before it reaches callers.
///
/// A 16-digit card written in groups of four also matches the Aadhaar
/// pattern on its first twelve digits, so any AADHAAR result overlapping a
/// CREDIT_CARD result is dropped. Everything else passes through in order.
pub fn clean_entities(results: Vec<RecognizerResult>) -> Vec<RecognizerResult> {
    let cards: Vec<RecognizerResult> = results
        .iter()
        .filter(|r| r.entity_type == EntityType::CreditCard)
        .cloned()
        .collect();

    if cards.is_empty() {
        return results;
    }

    results
        .into_iter()
        .filter(|r| {
            let shadowed =
                r.entity_type == EntityType::Aadhaar && cards.iter().any(|c| r.overlaps(c));
            if shadowed {
                tracing::debug!(start = r.start, end = r.end, "Dropping AADHAAR inside CREDIT_CARD");
            }
            !shadowed
        })
        .collect()
}
