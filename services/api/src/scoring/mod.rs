pub mod handlers;
pub mod requests;
pub mod responses;

use axum::routing::{get, post};
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/score", post(handlers::score_votes))
        .route("/api/v1/risk", get(handlers::assess_risk))
        .route("/api/v1/segments", post(handlers::segment_text))
}
