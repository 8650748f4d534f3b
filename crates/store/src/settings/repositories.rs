use async_trait::async_trait;
use vigil_common::error::VigilResult;
use vigil_scoring::config::DetectionConfig;

use crate::settings::models::{ApiKey, Webhook};

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn detection_config(&self) -> VigilResult<DetectionConfig>;
    async fn list_api_keys(&self) -> VigilResult<Vec<ApiKey>>;
    async fn list_webhooks(&self) -> VigilResult<Vec<Webhook>>;
}
