use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use vigil_common::error::VigilResult;

use crate::alerts::models::{Alert, AlertFilter};
use crate::alerts::repositories::AlertRepository;
use crate::fixtures;

#[derive(Clone)]
pub struct MemoryAlertRepository {
    alerts: Arc<Vec<Alert>>,
}

impl MemoryAlertRepository {
    pub fn new(mut alerts: Vec<Alert>) -> Self {
        alerts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Self {
            alerts: Arc::new(alerts),
        }
    }

    /// Repository holding the demo alerts, timestamped relative to now.
    pub fn seeded() -> Self {
        let alerts = fixtures::demo_alerts(Utc::now());
        tracing::debug!(count = alerts.len(), "seeded alert repository");
        Self::new(alerts)
    }
}

#[async_trait]
impl AlertRepository for MemoryAlertRepository {
    async fn list_alerts(&self, filter: AlertFilter) -> VigilResult<Vec<Alert>> {
        let offset = filter.offset.unwrap_or(0);
        let limit = filter.limit.unwrap_or(usize::MAX);

        Ok(self
            .alerts
            .iter()
            .filter(|a| filter.matches(a))
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn get_alert(&self, id: &str) -> VigilResult<Option<Alert>> {
        Ok(self.alerts.iter().find(|a| a.id == id).cloned())
    }
}
