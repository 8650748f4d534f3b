use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::settings::responses::{ApiKeyView, DetectionView, SettingsResponse};
use crate::AppState;

pub async fn get_settings(
    State(state): State<AppState>,
) -> Result<Json<SettingsResponse>, ApiError> {
    let config = state.settings_repo.detection_config().await?;
    let api_keys = state
        .settings_repo
        .list_api_keys()
        .await?
        .into_iter()
        .map(ApiKeyView::from)
        .collect();
    let webhooks = state.settings_repo.list_webhooks().await?;

    Ok(Json(SettingsResponse {
        detection: DetectionView {
            min_alert_percent: config.min_alert_percent(),
            config,
        },
        api_keys,
        webhooks,
    }))
}
