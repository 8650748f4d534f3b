use serde::{Deserialize, Serialize};
use vigil_scoring::risk::{classify, RiskLevel};

/// Day labels of the heatmap's rows.
pub const HEATMAP_DAYS: [&str; 5] = ["Mon", "Tue", "Wed", "Thu", "Fri"];
/// First hour column of the heatmap.
pub const HEATMAP_FIRST_HOUR: u8 = 8;
/// Last hour column of the heatmap (inclusive).
pub const HEATMAP_LAST_HOUR: u8 = 19;

pub fn heatmap_hours() -> Vec<u8> {
    (HEATMAP_FIRST_HOUR..=HEATMAP_LAST_HOUR).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStat {
    pub title: String,
    pub value: String,
    pub change: String,
}

impl DashboardStat {
    /// Whether `change` is a month-over-month increase (`+` prefix).
    pub fn is_increase(&self) -> bool {
        self.change.starts_with('+')
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCell {
    pub day: String,
    pub hour: u8,
    pub count: u32,
    pub avg_score: f64,
}

impl HeatmapCell {
    pub fn level(&self) -> RiskLevel {
        classify(self.avg_score)
    }
}
