use async_trait::async_trait;
use vigil_common::error::VigilResult;

use crate::analysis::models::AnalysisRecord;

#[async_trait]
pub trait AnalysisRepository: Send + Sync {
    async fn get_analysis(&self, id: &str) -> VigilResult<Option<AnalysisRecord>>;

    /// Result of the analysis job `job_id`. The record id is
    /// `analysis_<job_id>`.
    async fn job_result(&self, job_id: &str) -> VigilResult<AnalysisRecord>;
}
