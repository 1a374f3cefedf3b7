use regex::Regex;

use super::entity::EntityType;

/// Highest score a result can carry (validated match)
pub const MAX_SCORE: f64 = 1.0;

/// Lowest score a result can carry; results at this score are dropped
pub const MIN_SCORE: f64 = 0.0;

/// A detected span produced by a recognizer.
///
/// `start` and `end` are byte offsets into the analyzed text.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognizerResult {
    pub entity_type: EntityType,
    pub start: usize,
    pub end: usize,
    pub score: f64,
    pub recognizer: String,
}

impl RecognizerResult {
    pub fn new(
        entity_type: EntityType,
        start: usize,
        end: usize,
        score: f64,
        recognizer: impl Into<String>,
    ) -> Self {
        Self {
            entity_type,
            start,
            end,
            score,
            recognizer: recognizer.into(),
        }
    }

    /// Whether two results share at least one byte
    pub fn overlaps(&self, other: &RecognizerResult) -> bool {
        !(self.end <= other.start || self.start >= other.end)
    }

    /// Whether this result's span lies entirely within `other`'s span
    pub fn contained_in(&self, other: &RecognizerResult) -> bool {
        self.start >= other.start && self.end <= other.end
    }

    /// The matched slice of `text`
    pub fn value<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// A detector for a single entity type
pub trait Recognizer: Send + Sync {
    /// Name reported on every result this recognizer produces
    fn name(&self) -> &str;

    fn supported_entity(&self) -> EntityType;

    /// Words that raise confidence when they appear shortly before a match
    fn context(&self) -> &[&'static str] {
        &[]
    }

    fn analyze(&self, text: &str) -> Vec<RecognizerResult>;
}

/// One regex with the base score its matches receive
#[derive(Debug, Clone)]
pub struct Pattern {
    pub name: String,
    pub regex: Regex,
    pub score: f64,
}

impl Pattern {
    /// Compile a pattern. Panics on an invalid regex, so only call with literals.
    pub fn new(name: &str, regex: &str, score: f64) -> Self {
        Self {
            name: name.to_string(),
            regex: Regex::new(regex).unwrap_or_else(|e| panic!("invalid pattern {name}: {e}")),
            score,
        }
    }
}

/// Checks a matched value.
///
/// `Some(true)` promotes the result to [`MAX_SCORE`], `Some(false)` drops it,
/// `None` leaves the pattern score in place.
pub type Validator = fn(&str) -> Option<bool>;

/// Regex-driven recognizer with optional validation
pub struct PatternRecognizer {
    name: String,
    entity: EntityType,
    patterns: Vec<Pattern>,
    validator: Option<Validator>,
    context: Vec<&'static str>,
}

impl PatternRecognizer {
    pub fn new(name: &str, entity: EntityType, patterns: Vec<Pattern>) -> Self {
        Self {
            name: name.to_string(),
            entity,
            patterns,
            validator: None,
            context: Vec::new(),
        }
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn with_context(mut self, words: &[&'static str]) -> Self {
        self.context = words.to_vec();
        self
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }
}

impl Recognizer for PatternRecognizer {
    fn name(&self) -> &str {
        &self.name
    }

    fn supported_entity(&self) -> EntityType {
        self.entity
    }

    fn context(&self) -> &[&'static str] {
        &self.context
    }

    fn analyze(&self, text: &str) -> Vec<RecognizerResult> {
        let mut results = Vec::new();

        for pattern in &self.patterns {
            for mat in pattern.regex.find_iter(text) {
                if mat.start() == mat.end() {
                    continue;
                }

                let score = match self.validator.map(|validate| validate(mat.as_str())) {
                    Some(Some(true)) => MAX_SCORE,
                    Some(Some(false)) => MIN_SCORE,
                    _ => pattern.score,
                };

                if score > MIN_SCORE {
                    results.push(RecognizerResult::new(
                        self.entity,
                        mat.start(),
                        mat.end(),
                        score,
                        &self.name,
                    ));
                }
            }
        }

        results
    }
}

/// Number of words before a match searched for context words
pub const CONTEXT_WINDOW_WORDS: usize = 5;

/// Score boost applied when a context word is found
pub const CONTEXT_SIMILARITY_FACTOR: f64 = 0.35;

/// Floor for a context-boosted score
pub const MIN_SCORE_WITH_CONTEXT: f64 = 0.4;

/// Raise scores of results preceded by one of the recognizer's context words
pub fn enhance_with_context(
    text: &str,
    results: &mut [RecognizerResult],
    context_words: &[&'static str],
) {
    if context_words.is_empty() {
        return;
    }

    for result in results.iter_mut() {
        if result.score >= MAX_SCORE {
            continue;
        }

        let preceding = &text[..result.start];
        let found = preceding
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .rev()
            .take(CONTEXT_WINDOW_WORDS)
            .any(|word| {
                context_words
                    .iter()
                    .any(|context| word.eq_ignore_ascii_case(context))
            });

        if found {
            let boosted = (result.score + CONTEXT_SIMILARITY_FACTOR).max(MIN_SCORE_WITH_CONTEXT);
            result.score = boosted.min(MAX_SCORE);
        }
    }
}
