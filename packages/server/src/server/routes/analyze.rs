use axum::{
    extract::{rejection::JsonRejection, Extension},
    Json,
};
use serde::{Deserialize, Deserializer, Serialize};

use crate::common::pii::{AnalyzeOptions, EntityType, RecognizerResult, DEFAULT_LANGUAGE};
use crate::common::ApiError;
use crate::server::app::AxumAppState;
use crate::server::middleware::ClientIp;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    /// Minimum confidence; numbers and numeric strings are both accepted
    #[serde(default, deserialize_with = "lenient_threshold")]
    pub threshold: Option<f64>,
    #[serde(default)]
    pub language: Option<String>,
    /// Restrict detection to these entity types
    #[serde(default)]
    pub entities: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityResponse {
    pub entity: EntityType,
    /// Character offset of the first matched character
    pub start: usize,
    /// Character offset one past the last matched character
    pub end: usize,
    pub confidence: f64,
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub entities: Vec<EntityResponse>,
}

/// Text analysis endpoint
///
/// Runs every recognizer, drops shadowed Aadhaar matches and returns the
/// results scoring at or above the threshold (default from config).
pub async fn analyze_handler(
    Extension(state): Extension<AxumAppState>,
    client_ip: Option<Extension<ClientIp>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Json(request) = payload?;

    let threshold = validate_threshold(request.threshold.unwrap_or(state.deps.default_threshold))?;
    let options = build_options(request.language, request.entities)?.with_threshold(threshold);

    let results = state
        .deps
        .analyzer
        .analyze(&request.text, &options)
        .await
        .map_err(ApiError::from_service)?;

    let entities = to_entity_responses(&request.text, &results);

    tracing::info!(
        client_ip = ?client_ip.map(|Extension(ClientIp(ip))| ip),
        chars = request.text.chars().count(),
        threshold,
        entities = entities.len(),
        "Analyzed text"
    );

    Ok(Json(AnalyzeResponse { entities }))
}

/// Reject thresholds outside [0, 1]
pub fn validate_threshold(threshold: f64) -> Result<f64, ApiError> {
    if threshold.is_finite() && (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(ApiError::Validation(format!(
            "threshold must be between 0 and 1, got {}",
            threshold
        )))
    }
}

/// Turn raw request fields into analyzer options
pub fn build_options(
    language: Option<String>,
    entities: Option<Vec<String>>,
) -> Result<AnalyzeOptions, ApiError> {
    let mut options = AnalyzeOptions {
        language: language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        ..AnalyzeOptions::default()
    };

    if let Some(names) = entities {
        let parsed = names
            .iter()
            .map(|name| name.parse::<EntityType>())
            .collect::<Result<Vec<_>, _>>()?;
        options = options.with_entities(parsed);
    }

    Ok(options)
}

/// Convert byte-offset results into the API shape with character offsets
pub fn to_entity_responses(text: &str, results: &[RecognizerResult]) -> Vec<EntityResponse> {
    let offsets = CharOffsets::new(text, results);
    results
        .iter()
        .map(|r| EntityResponse {
            entity: r.entity_type,
            start: offsets.get(r.start),
            end: offsets.get(r.end),
            confidence: round_confidence(r.score),
            value: r.value(text).to_string(),
        })
        .collect()
}

/// Byte to character offset lookup, built in one pass over the text
struct CharOffsets {
    // (byte offset, char offset), sorted by byte offset; empty for ASCII
    table: Vec<(usize, usize)>,
}

impl CharOffsets {
    fn new(text: &str, results: &[RecognizerResult]) -> Self {
        if text.is_ascii() {
            return Self { table: Vec::new() };
        }

        let mut bytes: Vec<usize> = results.iter().flat_map(|r| [r.start, r.end]).collect();
        bytes.sort_unstable();
        bytes.dedup();

        let mut table = Vec::with_capacity(bytes.len());
        let mut pending = bytes.into_iter().peekable();
        let mut chars = 0;
        for (byte, _) in text.char_indices() {
            while let Some(offset) = pending.next_if(|&offset| offset <= byte) {
                table.push((offset, chars));
            }
            if pending.peek().is_none() {
                break;
            }
            chars += 1;
        }
        // Whatever is left sits at the end of the text
        table.extend(pending.map(|offset| (offset, chars)));

        Self { table }
    }

    fn get(&self, byte_offset: usize) -> usize {
        if self.table.is_empty() {
            return byte_offset;
        }
        match self.table.binary_search_by_key(&byte_offset, |&(byte, _)| byte) {
            Ok(index) => self.table[index].1,
            Err(_) => byte_offset,
        }
    }
}

fn round_confidence(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

fn lenient_threshold<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("threshold is not a number: {:?}", s))),
    }
}
