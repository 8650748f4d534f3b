use serde::Serialize;
use vigil_scoring::risk::{RiskLevel, Severity};
use vigil_store::dashboard::models::{DashboardStat, HeatmapCell};

#[derive(Debug, Serialize)]
pub struct StatView {
    #[serde(flatten)]
    pub stat: DashboardStat,
    pub increasing: bool,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub data: Vec<StatView>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct HeatmapCellView {
    #[serde(flatten)]
    pub cell: HeatmapCell,
    pub level: RiskLevel,
    pub severity: Severity,
}

#[derive(Debug, Serialize)]
pub struct HeatmapResponse {
    pub days: Vec<String>,
    pub hours: Vec<u8>,
    pub data: Vec<HeatmapCellView>,
}
