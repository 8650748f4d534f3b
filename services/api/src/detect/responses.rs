use chrono::{DateTime, Utc};
use serde::Serialize;
use vigil_scoring::composite::ModelVote;
use vigil_scoring::risk::RiskLevel;
use vigil_store::analysis::models::AnalysisMetadata;
use vigil_store::jobs::models::JobStatus;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub job_id: String,
    pub status: JobStatus,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResultView {
    pub id: String,
    pub source_text: String,
    pub composite_score: f64,
    pub risk_level: RiskLevel,
    pub alert: bool,
    pub model_votes: Vec<ModelVote>,
    pub timestamp: DateTime<Utc>,
    pub metadata: AnalysisMetadata,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatusResponse {
    pub job_id: String,
    pub status: JobStatus,
    pub progress: u8,
    pub stage: String,
    pub result: AnalysisResultView,
}
