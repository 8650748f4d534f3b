use axum::extract::{Path, State};
use axum::Json;
use vigil_common::error::VigilError;

use crate::analyses::responses::InvestigationResponse;
use crate::error::ApiError;
use crate::AppState;

pub async fn get_investigation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InvestigationResponse>, ApiError> {
    let record = state
        .analysis_repo
        .get_analysis(&id)
        .await?
        .ok_or_else(|| VigilError::NotFound(format!("analysis not found: {id}")))?;

    let config = state.settings_repo.detection_config().await?;

    // Stored analyses are trusted; a failure here is a data defect, not bad input.
    let composite = record
        .composite(&config)
        .map_err(|e| VigilError::Internal(format!("analysis {id} votes: {e}")))?;
    let segments = record
        .segments()
        .map_err(|e| VigilError::Internal(format!("analysis {id} highlights: {e}")))?;

    Ok(Json(InvestigationResponse {
        highlight_count: record.highlights.len(),
        id: record.id,
        source_text: record.source_text,
        metadata: record.metadata,
        timestamp: record.timestamp,
        composite,
        segments,
    }))
}
