use axum::{extract::Extension, Json};

use crate::common::pii::EntityType;
use crate::server::app::AxumAppState;

/// Entity types the configured analyzer can report
pub async fn supported_entities_handler(
    Extension(state): Extension<AxumAppState>,
) -> Json<Vec<EntityType>> {
    Json(state.deps.analyzer.supported_entities())
}
