pub mod handlers;
pub mod responses;

use axum::routing::get;
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/alerts", get(handlers::list_alerts))
        .route("/api/v1/alerts/{id}", get(handlers::get_alert))
}
