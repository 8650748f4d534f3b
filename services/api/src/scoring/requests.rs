use serde::Deserialize;
use vigil_scoring::segments::HighlightedSegment;

#[derive(Debug, Deserialize)]
pub struct RiskQuery {
    pub score: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentRequest {
    pub source_text: String,
    #[serde(default)]
    pub highlights: Vec<HighlightedSegment>,
}
