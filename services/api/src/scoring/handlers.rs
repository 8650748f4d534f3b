use axum::extract::{Query, State};
use axum::Json;
use vigil_common::error::VigilError;
use vigil_scoring::composite::{evaluate_with, CompositeResult, ModelVote};
use vigil_scoring::risk::assess;
use vigil_scoring::segments::build_segments;

use crate::error::ApiError;
use crate::scoring::requests::{RiskQuery, SegmentRequest};
use crate::scoring::responses::{RiskResponse, SegmentsResponse};
use crate::AppState;

pub async fn score_votes(
    State(state): State<AppState>,
    Json(votes): Json<Vec<ModelVote>>,
) -> Result<Json<CompositeResult>, ApiError> {
    let config = state.settings_repo.detection_config().await?;
    let result = evaluate_with(&votes, &config)?;
    tracing::debug!(
        votes = votes.len(),
        composite = result.composite_score,
        level = %result.level,
        alert = result.alert,
        "scored vote set"
    );
    Ok(Json(result))
}

pub async fn assess_risk(Query(query): Query<RiskQuery>) -> Result<Json<RiskResponse>, ApiError> {
    if !query.score.is_finite() {
        return Err(ApiError(VigilError::Validation(
            "score must be a finite number".to_string(),
        )));
    }
    let assessment = assess(query.score);
    Ok(Json(RiskResponse {
        level: assessment.level,
        score: assessment.score,
        severity: assessment.level.severity(),
    }))
}

pub async fn segment_text(
    Json(body): Json<SegmentRequest>,
) -> Result<Json<SegmentsResponse>, ApiError> {
    let data = build_segments(&body.source_text, &body.highlights)?;
    let count = data.len();
    Ok(Json(SegmentsResponse { data, count }))
}
