use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use super::custom::custom_recognizers;
use super::entity::EntityType;
use super::predefined::{
    credit_card_recognizer, email_recognizer, iban_recognizer, ip_recognizer, phone_recognizer,
    LocationRecognizer, PersonRecognizer,
};
use super::recognizer::{enhance_with_context, Recognizer, RecognizerResult};

/// The only language the recognizers are written for
pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalyzerError {
    #[error("Unsupported language: {0} (supported: en)")]
    UnsupportedLanguage(String),

    #[error("No recognizers available for the requested entities")]
    NoRecognizers,
}

/// Ordered collection of recognizers consulted by the engine
#[derive(Clone, Default)]
pub struct RecognizerRegistry {
    recognizers: Vec<Arc<dyn Recognizer>>,
}

impl RecognizerRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry loaded with the generic built-in recognizers
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.add_recognizer(email_recognizer());
        registry.add_recognizer(phone_recognizer());
        registry.add_recognizer(credit_card_recognizer());
        registry.add_recognizer(iban_recognizer());
        registry.add_recognizer(ip_recognizer());
        registry.add_recognizer(PersonRecognizer::new());
        registry.add_recognizer(LocationRecognizer::new());
        registry
    }

    pub fn add_recognizer<R: Recognizer + 'static>(&mut self, recognizer: R) {
        self.recognizers.push(Arc::new(recognizer));
    }

    pub fn len(&self) -> usize {
        self.recognizers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recognizers.is_empty()
    }

    /// Recognizers producing any of `entities`, or all of them when `None`
    pub fn recognizers_for(&self, entities: Option<&[EntityType]>) -> Vec<Arc<dyn Recognizer>> {
        self.recognizers
            .iter()
            .filter(|r| entities.map_or(true, |wanted| wanted.contains(&r.supported_entity())))
            .cloned()
            .collect()
    }

    /// Entity types at least one registered recognizer can emit
    pub fn supported_entities(&self) -> Vec<EntityType> {
        self.recognizers
            .iter()
            .map(|r| r.supported_entity())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Per-call analysis options
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    pub language: String,
    /// Restrict analysis to these entity types
    pub entities: Option<Vec<EntityType>>,
    /// Results scoring below this are dropped
    pub score_threshold: f64,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            entities: None,
            score_threshold: 0.0,
        }
    }
}

impl AnalyzeOptions {
    pub fn with_entities(mut self, entities: Vec<EntityType>) -> Self {
        self.entities = Some(entities);
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.score_threshold = threshold;
        self
    }
}

/// Runs every registered recognizer over a text and merges the results
#[derive(Clone)]
pub struct AnalyzerEngine {
    registry: RecognizerRegistry,
}

impl Default for AnalyzerEngine {
    /// Built-in recognizers plus PAN, Aadhaar, Voter ID and organization IDs
    fn default() -> Self {
        let mut registry = RecognizerRegistry::with_defaults();
        for recognizer in custom_recognizers() {
            registry.add_recognizer(recognizer);
        }
        Self::new(registry)
    }
}

impl AnalyzerEngine {
    pub fn new(registry: RecognizerRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &RecognizerRegistry {
        &self.registry
    }

    pub fn analyze(
        &self,
        text: &str,
        options: &AnalyzeOptions,
    ) -> Result<Vec<RecognizerResult>, AnalyzerError> {
        if options.language != DEFAULT_LANGUAGE {
            return Err(AnalyzerError::UnsupportedLanguage(options.language.clone()));
        }

        let recognizers = self.registry.recognizers_for(options.entities.as_deref());
        if recognizers.is_empty() {
            return Err(AnalyzerError::NoRecognizers);
        }

        if text.is_empty() {
            return Ok(Vec::new());
        }

        let mut results = Vec::new();
        for recognizer in &recognizers {
            let mut found = recognizer.analyze(text);
            enhance_with_context(text, &mut found, recognizer.context());
            tracing::trace!(
                recognizer = recognizer.name(),
                count = found.len(),
                "Recognizer finished"
            );
            results.extend(found);
        }

        let mut results = remove_duplicates(results);
        results.retain(|r| r.score >= options.score_threshold);

        Ok(results)
    }
}

/// Drop results of the same entity type that are covered by a result
/// with an equal or higher score. Output is ordered by span.
pub fn remove_duplicates(mut results: Vec<RecognizerResult>) -> Vec<RecognizerResult> {
    // Outer spans come before the spans they contain; equal spans by score
    results.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then(b.end.cmp(&a.end))
            .then(b.score.total_cmp(&a.score))
    });

    // Per entity type: end offset -> best score among kept spans ending
    // there. Entries that another entry beats on both end and score are
    // pruned, so scores strictly decrease as the end offset grows.
    let mut frontiers: HashMap<EntityType, BTreeMap<usize, f64>> = HashMap::new();
    let mut kept: Vec<RecognizerResult> = Vec::with_capacity(results.len());

    for result in results {
        let frontier = frontiers.entry(result.entity_type).or_default();

        // Every span already seen starts at or before this one, so any of
        // them ending at or after it contains it
        let covered = frontier
            .range(result.end..)
            .next()
            .is_some_and(|(_, &score)| score >= result.score);
        if covered {
            continue;
        }

        let dominated: Vec<usize> = frontier
            .range(..=result.end)
            .rev()
            .take_while(|&(_, &score)| score <= result.score)
            .map(|(&end, _)| end)
            .collect();
        for end in dominated {
            frontier.remove(&end);
        }
        frontier.insert(result.end, result.score);

        kept.push(result);
    }

    kept.sort_by(|a, b| a.start.cmp(&b.start).then(a.end.cmp(&b.end)));
    kept
}
