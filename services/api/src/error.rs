use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use vigil_common::error::VigilError;

pub struct ApiError(pub VigilError);

impl From<VigilError> for ApiError {
    fn from(err: VigilError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match (&self.0, self.0.client_message()) {
            (VigilError::NotFound(msg), _) => (StatusCode::NOT_FOUND, msg.clone()),
            (_, Some(msg)) => (StatusCode::BAD_REQUEST, msg.to_string()),
            (other, None) => {
                tracing::error!(error = %other, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}
