use async_trait::async_trait;
use vigil_common::error::VigilResult;

use crate::alerts::models::{Alert, AlertFilter};

#[async_trait]
pub trait AlertRepository: Send + Sync {
    /// Alerts newest first, filtered then paged by `offset`/`limit`.
    async fn list_alerts(&self, filter: AlertFilter) -> VigilResult<Vec<Alert>>;
    async fn get_alert(&self, id: &str) -> VigilResult<Option<Alert>>;
}
