use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use uuid::Uuid;
use vigil_common::error::VigilError;
use vigil_store::jobs::models::{progress_stage, JobStatus};

use crate::detect::requests::JobStatusQuery;
use crate::detect::responses::{AnalysisResultView, JobStatusResponse, SubmitResponse};
use crate::error::ApiError;
use crate::extractors::{size_limit_message, UploadedDocument};
use crate::AppState;

/// Document types accepted for analysis: plain text, PDF and DOCX.
pub const ALLOWED_CONTENT_TYPES: [&str; 3] = [
    "text/plain",
    "application/pdf",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

fn validate_upload(upload: &UploadedDocument, max_bytes: usize) -> Result<(), VigilError> {
    let allowed = upload
        .content_type
        .as_deref()
        .is_some_and(|ct| ALLOWED_CONTENT_TYPES.contains(&ct));
    if !allowed {
        return Err(VigilError::Validation(
            "Invalid file type. Only TXT, PDF, and DOCX files are supported.".to_string(),
        ));
    }
    if upload.size > max_bytes {
        return Err(VigilError::Validation(size_limit_message(max_bytes)));
    }
    Ok(())
}

/// `job_<unix millis>_<9 random chars>`
fn new_job_id(now: DateTime<Utc>) -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("job_{}_{}", now.timestamp_millis(), &random[..9])
}

pub async fn submit_document(
    State(state): State<AppState>,
    upload: UploadedDocument,
) -> Result<impl IntoResponse, ApiError> {
    if let Err(err) = validate_upload(&upload, state.max_upload_bytes) {
        tracing::warn!(
            content_type = ?upload.content_type,
            size = upload.size,
            error = %err,
            "upload rejected"
        );
        return Err(err.into());
    }

    let now = Utc::now();
    let job_id = new_job_id(now);
    tracing::info!(
        %job_id,
        file_name = ?upload.file_name,
        size = upload.size,
        "document queued for analysis"
    );

    let resp = SubmitResponse {
        job_id,
        status: JobStatus::Pending,
        message: "File received and queued for analysis".to_string(),
        timestamp: now,
    };
    Ok((StatusCode::ACCEPTED, Json(resp)))
}

pub async fn job_status(
    State(state): State<AppState>,
    Query(query): Query<JobStatusQuery>,
) -> Result<Json<JobStatusResponse>, ApiError> {
    let job_id = query
        .job_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| VigilError::Validation("Job ID is required".to_string()))?;

    let record = state.analysis_repo.job_result(&job_id).await?;
    let config = state.settings_repo.detection_config().await?;
    let composite = record
        .composite(&config)
        .map_err(|e| VigilError::Internal(format!("stored votes for {job_id}: {e}")))?;

    let progress = 100;
    Ok(Json(JobStatusResponse {
        job_id,
        status: JobStatus::Completed,
        progress,
        stage: progress_stage(progress).to_string(),
        result: AnalysisResultView {
            id: record.id,
            source_text: record.source_text,
            composite_score: composite.composite_score,
            risk_level: composite.level,
            alert: composite.alert,
            model_votes: record.model_votes,
            timestamp: record.timestamp,
            metadata: record.metadata,
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(content_type: Option<&str>, size: usize) -> UploadedDocument {
        UploadedDocument {
            file_name: Some("doc".to_string()),
            content_type: content_type.map(str::to_owned),
            size,
        }
    }

    #[test]
    fn accepts_allowed_types_within_limit() {
        for ct in ALLOWED_CONTENT_TYPES {
            assert!(validate_upload(&upload(Some(ct), 10), 100).is_ok(), "{ct}");
        }
        assert!(validate_upload(&upload(Some("text/plain"), 100), 100).is_ok());
    }

    #[test]
    fn rejects_unknown_or_missing_type() {
        assert!(validate_upload(&upload(Some("image/png"), 10), 100).is_err());
        assert!(validate_upload(&upload(None, 10), 100).is_err());
    }

    #[test]
    fn rejects_oversize_upload() {
        let err = validate_upload(&upload(Some("text/plain"), 101), 100).unwrap_err();
        assert!(err.to_string().contains("exceeds"), "{err}");
    }

    #[test]
    fn job_id_shape() {
        let now = Utc::now();
        let id = new_job_id(now);
        let parts: Vec<&str> = id.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "job");
        assert_eq!(parts[1], now.timestamp_millis().to_string());
        assert_eq!(parts[2].len(), 9);
    }
}
