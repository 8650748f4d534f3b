use std::sync::Arc;

use async_trait::async_trait;
use vigil_common::error::VigilResult;

use crate::dashboard::models::{DashboardStat, HeatmapCell};
use crate::dashboard::repositories::DashboardRepository;
use crate::fixtures;

#[derive(Clone)]
pub struct MemoryDashboardRepository {
    stats: Arc<Vec<DashboardStat>>,
    heatmap: Arc<Vec<HeatmapCell>>,
}

impl MemoryDashboardRepository {
    pub fn new(stats: Vec<DashboardStat>, heatmap: Vec<HeatmapCell>) -> Self {
        Self {
            stats: Arc::new(stats),
            heatmap: Arc::new(heatmap),
        }
    }

    pub fn seeded() -> Self {
        Self::new(fixtures::demo_stats(), fixtures::demo_heatmap())
    }
}

#[async_trait]
impl DashboardRepository for MemoryDashboardRepository {
    async fn list_stats(&self) -> VigilResult<Vec<DashboardStat>> {
        Ok(self.stats.as_ref().clone())
    }

    async fn list_heatmap(&self) -> VigilResult<Vec<HeatmapCell>> {
        Ok(self.heatmap.as_ref().clone())
    }
}
