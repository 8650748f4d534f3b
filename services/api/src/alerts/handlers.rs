use axum::extract::{Path, Query, State};
use axum::Json;
use vigil_common::error::VigilError;
use vigil_store::alerts::models::AlertFilter;

use crate::alerts::responses::{AlertView, ListAlertsResponse};
use crate::error::ApiError;
use crate::AppState;

pub async fn list_alerts(
    State(state): State<AppState>,
    Query(filter): Query<AlertFilter>,
) -> Result<Json<ListAlertsResponse>, ApiError> {
    let config = state.settings_repo.detection_config().await?;
    let data: Vec<AlertView> = state
        .alert_repo
        .list_alerts(filter)
        .await?
        .into_iter()
        .map(|alert| AlertView::new(alert, &config))
        .collect();
    let count = data.len();
    Ok(Json(ListAlertsResponse { data, count }))
}

pub async fn get_alert(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AlertView>, ApiError> {
    let alert = state
        .alert_repo
        .get_alert(&id)
        .await?
        .ok_or_else(|| VigilError::NotFound(format!("alert not found: {id}")))?;
    let config = state.settings_repo.detection_config().await?;
    Ok(Json(AlertView::new(alert, &config)))
}
