use axum::extract::State;
use axum::Json;
use vigil_store::dashboard::models::{heatmap_hours, HEATMAP_DAYS};

use crate::dashboard::responses::{HeatmapCellView, HeatmapResponse, StatView, StatsResponse};
use crate::error::ApiError;
use crate::AppState;

pub async fn list_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, ApiError> {
    let data: Vec<StatView> = state
        .dashboard_repo
        .list_stats()
        .await?
        .into_iter()
        .map(|stat| StatView {
            increasing: stat.is_increase(),
            stat,
        })
        .collect();
    let count = data.len();
    Ok(Json(StatsResponse { data, count }))
}

pub async fn get_heatmap(
    State(state): State<AppState>,
) -> Result<Json<HeatmapResponse>, ApiError> {
    let data = state
        .dashboard_repo
        .list_heatmap()
        .await?
        .into_iter()
        .map(|cell| {
            let level = cell.level();
            HeatmapCellView {
                cell,
                level,
                severity: level.severity(),
            }
        })
        .collect();

    Ok(Json(HeatmapResponse {
        days: HEATMAP_DAYS.iter().map(|d| d.to_string()).collect(),
        hours: heatmap_hours(),
        data,
    }))
}
