use axum::extract::{FromRequest, Multipart, Request};
use axum::http::StatusCode;
use vigil_common::error::VigilError;

use crate::error::ApiError;
use crate::AppState;

/// Multipart form field carrying the document.
pub const FILE_FIELD: &str = "file";

/// The `file` part of a multipart upload. Only its metadata is kept; the
/// bytes are read to measure the size and then dropped.
#[derive(Debug)]
pub struct UploadedDocument {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub size: usize,
}

pub fn size_limit_message(max_bytes: usize) -> String {
    const MIB: usize = 1024 * 1024;
    if max_bytes >= MIB && max_bytes % MIB == 0 {
        format!("File size exceeds {}MB limit", max_bytes / MIB)
    } else {
        format!("File size exceeds {max_bytes} byte limit")
    }
}

impl FromRequest<AppState> for UploadedDocument {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| ApiError(VigilError::Validation(e.body_text())))?;

        let read_error = |e: axum::extract::multipart::MultipartError| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError(VigilError::Validation(size_limit_message(
                    state.max_upload_bytes,
                )))
            } else {
                ApiError(VigilError::Validation(e.body_text()))
            }
        };

        while let Some(field) = multipart.next_field().await.map_err(read_error)? {
            if field.name() != Some(FILE_FIELD) {
                continue;
            }
            let file_name = field.file_name().map(str::to_owned);
            let content_type = field.content_type().map(str::to_owned);
            let bytes = field.bytes().await.map_err(read_error)?;

            return Ok(UploadedDocument {
                file_name,
                content_type,
                size: bytes.len(),
            });
        }

        Err(ApiError(VigilError::Validation(
            "No file provided".to_string(),
        )))
    }
}
