use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use vigil_common::error::VigilResult;

use crate::analysis::models::AnalysisRecord;
use crate::analysis::repositories::AnalysisRepository;
use crate::fixtures;

/// Analyses keyed by id, plus a canned record answered for every job.
#[derive(Clone)]
pub struct MemoryAnalysisRepository {
    analyses: Arc<HashMap<String, AnalysisRecord>>,
    job_template: Arc<AnalysisRecord>,
}

impl MemoryAnalysisRepository {
    pub fn new(analyses: Vec<AnalysisRecord>, job_template: AnalysisRecord) -> Self {
        let analyses = analyses.into_iter().map(|a| (a.id.clone(), a)).collect();
        Self {
            analyses: Arc::new(analyses),
            job_template: Arc::new(job_template),
        }
    }

    pub fn seeded() -> Self {
        Self::new(
            vec![fixtures::demo_analysis(Utc::now())],
            fixtures::sample_job_record(Utc::now()),
        )
    }
}

#[async_trait]
impl AnalysisRepository for MemoryAnalysisRepository {
    async fn get_analysis(&self, id: &str) -> VigilResult<Option<AnalysisRecord>> {
        Ok(self.analyses.get(id).cloned())
    }

    async fn job_result(&self, job_id: &str) -> VigilResult<AnalysisRecord> {
        let mut record = self.job_template.as_ref().clone();
        record.id = format!("analysis_{job_id}");
        record.timestamp = Utc::now();
        Ok(record)
    }
}
