use serde::Serialize;
use vigil_scoring::risk::{RiskLevel, Severity};
use vigil_scoring::segments::Segment;

#[derive(Debug, Serialize)]
pub struct RiskResponse {
    pub level: RiskLevel,
    pub score: f64,
    pub severity: Severity,
}

#[derive(Debug, Serialize)]
pub struct SegmentsResponse {
    pub data: Vec<Segment>,
    pub count: usize,
}
