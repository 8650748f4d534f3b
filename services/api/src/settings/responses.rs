use serde::Serialize;
use vigil_scoring::config::DetectionConfig;
use vigil_store::settings::models::{ApiKey, Webhook};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionView {
    #[serde(flatten)]
    pub config: DetectionConfig,
    pub min_alert_percent: u8,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyView {
    #[serde(flatten)]
    pub key: ApiKey,
    pub masked_prefix: String,
}

impl From<ApiKey> for ApiKeyView {
    fn from(key: ApiKey) -> Self {
        Self {
            masked_prefix: key.masked_prefix(),
            key,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
    pub detection: DetectionView,
    pub api_keys: Vec<ApiKeyView>,
    pub webhooks: Vec<Webhook>,
}
