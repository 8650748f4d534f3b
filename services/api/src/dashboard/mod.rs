pub mod handlers;
pub mod responses;

use axum::routing::get;
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/dashboard/stats", get(handlers::list_stats))
        .route("/api/v1/dashboard/heatmap", get(handlers::get_heatmap))
}
