use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct JobStatusQuery {
    #[serde(rename = "jobId")]
    pub job_id: Option<String>,
}
