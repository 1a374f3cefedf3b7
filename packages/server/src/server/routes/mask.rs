use axum::{
    extract::{rejection::JsonRejection, Extension},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::common::pii::{mask_text, MaskStrategy};
use crate::common::ApiError;
use crate::server::app::AxumAppState;
use crate::server::middleware::ClientIp;
use crate::server::routes::analyze::build_options;

#[derive(Debug, Deserialize)]
pub struct MaskRequest {
    pub text: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub entities: Option<Vec<String>>,
    #[serde(default)]
    pub strategy: MaskStrategy,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MaskResponse {
    pub masked: String,
}

/// Masking endpoint
///
/// Every cleaned result is masked regardless of score; a `threshold` field
/// in the body is accepted and ignored.
pub async fn mask_handler(
    Extension(state): Extension<AxumAppState>,
    client_ip: Option<Extension<ClientIp>>,
    payload: Result<Json<MaskRequest>, JsonRejection>,
) -> Result<Json<MaskResponse>, ApiError> {
    let Json(request) = payload?;
    let options = build_options(request.language, request.entities)?;

    let results = state
        .deps
        .analyzer
        .analyze(&request.text, &options)
        .await
        .map_err(ApiError::from_service)?;

    let outcome = mask_text(&request.text, &results, request.strategy);

    tracing::info!(
        client_ip = ?client_ip.map(|Extension(ClientIp(ip))| ip),
        strategy = ?request.strategy,
        detected = results.len(),
        masked = outcome.applied,
        "Masked text"
    );

    Ok(Json(MaskResponse {
        masked: outcome.masked,
    }))
}
