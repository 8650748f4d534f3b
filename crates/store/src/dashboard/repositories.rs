use async_trait::async_trait;
use vigil_common::error::VigilResult;

use crate::dashboard::models::{DashboardStat, HeatmapCell};

#[async_trait]
pub trait DashboardRepository: Send + Sync {
    async fn list_stats(&self) -> VigilResult<Vec<DashboardStat>>;
    async fn list_heatmap(&self) -> VigilResult<Vec<HeatmapCell>>;
}
