use std::sync::Arc;

use async_trait::async_trait;
use vigil_common::error::VigilResult;
use vigil_scoring::config::DetectionConfig;

use crate::fixtures;
use crate::settings::models::{ApiKey, Webhook};
use crate::settings::repositories::SettingsRepository;

#[derive(Clone)]
pub struct MemorySettingsRepository {
    detection: DetectionConfig,
    api_keys: Arc<Vec<ApiKey>>,
    webhooks: Arc<Vec<Webhook>>,
}

impl MemorySettingsRepository {
    /// Fails with `Config` when `detection` is out of bounds.
    pub fn new(
        detection: DetectionConfig,
        api_keys: Vec<ApiKey>,
        webhooks: Vec<Webhook>,
    ) -> VigilResult<Self> {
        detection.validate()?;
        Ok(Self {
            detection,
            api_keys: Arc::new(api_keys),
            webhooks: Arc::new(webhooks),
        })
    }

    pub fn seeded() -> VigilResult<Self> {
        Self::new(
            DetectionConfig::default(),
            fixtures::demo_api_keys(),
            fixtures::demo_webhooks(),
        )
    }
}

#[async_trait]
impl SettingsRepository for MemorySettingsRepository {
    async fn detection_config(&self) -> VigilResult<DetectionConfig> {
        Ok(self.detection.clone())
    }

    async fn list_api_keys(&self) -> VigilResult<Vec<ApiKey>> {
        Ok(self.api_keys.as_ref().clone())
    }

    async fn list_webhooks(&self) -> VigilResult<Vec<Webhook>> {
        Ok(self.webhooks.as_ref().clone())
    }
}
