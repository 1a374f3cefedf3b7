use axum::{
    extract::{
        multipart::{Multipart, MultipartRejection},
        rejection::QueryRejection,
        Extension, Query,
    },
    Json,
};
use serde::Deserialize;

use crate::common::pii::AnalyzeOptions;
use crate::common::ApiError;
use crate::server::app::AxumAppState;
use crate::server::middleware::ClientIp;
use crate::server::routes::analyze::{to_entity_responses, validate_threshold, AnalyzeResponse};

/// Name of the multipart field carrying the document
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Default, Deserialize)]
pub struct UploadParams {
    /// Optional minimum confidence; unfiltered when absent
    pub threshold: Option<f64>,
}

/// PDF upload endpoint
///
/// Extracts the text of every page, then runs the same pipeline as /analyze.
/// Offsets refer to the extracted text.
pub async fn upload_pdf_handler(
    Extension(state): Extension<AxumAppState>,
    client_ip: Option<Extension<ClientIp>>,
    params: Result<Query<UploadParams>, QueryRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Query(params) = params?;
    let threshold = params.threshold.map(validate_threshold).transpose()?;
    let mut multipart = multipart?;

    let mut file = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(FILE_FIELD) {
            file = Some(field.bytes().await?);
            break;
        }
    }
    let bytes = file.ok_or_else(|| ApiError::Validation("Field required: file".to_string()))?;
    let size = bytes.len();

    let document = state
        .deps
        .extractor
        .extract(bytes.to_vec())
        .await
        .map_err(ApiError::from_service)?;

    let mut results = state
        .deps
        .analyzer
        .analyze(&document.text, &AnalyzeOptions::default())
        .await
        .map_err(ApiError::from_service)?;

    if let Some(threshold) = threshold {
        results.retain(|r| r.score >= threshold);
    }

    let entities = to_entity_responses(&document.text, &results);

    tracing::info!(
        client_ip = ?client_ip.map(|Extension(ClientIp(ip))| ip),
        bytes = size,
        pages = document.page_count,
        pages_with_text = document.pages_with_text,
        entities = entities.len(),
        "Analyzed uploaded PDF"
    );

    Ok(Json(AnalyzeResponse { entities }))
}
