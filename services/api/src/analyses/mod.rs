pub mod handlers;
pub mod responses;

use axum::routing::get;
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/v1/analyses/{id}", get(handlers::get_investigation))
}
