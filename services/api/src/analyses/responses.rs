use chrono::{DateTime, Utc};
use serde::Serialize;
use vigil_scoring::composite::CompositeResult;
use vigil_scoring::segments::Segment;
use vigil_store::analysis::models::AnalysisMetadata;

/// Everything the investigation view renders for one analysis.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestigationResponse {
    pub id: String,
    pub source_text: String,
    pub metadata: AnalysisMetadata,
    pub timestamp: DateTime<Utc>,
    pub composite: CompositeResult,
    pub segments: Vec<Segment>,
    pub highlight_count: usize,
}
