pub mod handlers;
pub mod requests;
pub mod responses;

use axum::routing::post;
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/api/v1/detect",
        post(handlers::submit_document).get(handlers::job_status),
    )
}
