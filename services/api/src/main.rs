mod alerts;
mod analyses;
mod dashboard;
mod detect;
mod error;
mod extractors;
mod scoring;
mod settings;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower_http::cors::CorsLayer;
use vigil_common::types::ServiceInfo;
use vigil_config::{init_tracing, AppConfig};
use vigil_store::alerts::repositories::AlertRepository;
use vigil_store::analysis::repositories::AnalysisRepository;
use vigil_common::error::VigilResult;
use vigil_store::dashboard::repositories::DashboardRepository;
use vigil_store::settings::repositories::SettingsRepository;
use vigil_store::{
    MemoryAlertRepository, MemoryAnalysisRepository, MemoryDashboardRepository,
    MemorySettingsRepository,
};

/// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub alert_repo: Arc<dyn AlertRepository>,
    pub dashboard_repo: Arc<dyn DashboardRepository>,
    pub analysis_repo: Arc<dyn AnalysisRepository>,
    pub settings_repo: Arc<dyn SettingsRepository>,
    pub max_upload_bytes: usize,
}

impl AppState {
    /// State backed by the in-memory demo repositories.
    pub fn seeded(max_upload_bytes: usize) -> VigilResult<Self> {
        Ok(Self {
            alert_repo: Arc::new(MemoryAlertRepository::seeded()),
            dashboard_repo: Arc::new(MemoryDashboardRepository::seeded()),
            analysis_repo: Arc::new(MemoryAnalysisRepository::seeded()),
            settings_repo: Arc::new(MemorySettingsRepository::seeded()?),
            max_upload_bytes,
        })
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn info() -> Json<ServiceInfo> {
    Json(ServiceInfo::new("vigil-api"))
}

async fn metrics() -> impl IntoResponse {
    let body = format!(
        "\
# HELP vigil_up Service up indicator\n\
# TYPE vigil_up gauge\n\
vigil_up 1\n\
# HELP vigil_info Service info\n\
# TYPE vigil_info gauge\n\
vigil_info{{service=\"vigil-api\",version=\"{}\"}} 1\n",
        env!("CARGO_PKG_VERSION")
    );

    (
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        body,
    )
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

fn build_router(state: AppState, cors_origins: &[String]) -> Router {
    let body_limit = state.max_upload_bytes.saturating_add(MULTIPART_OVERHEAD);

    Router::new()
        .route("/health", get(health))
        .route("/info", get(info))
        .route("/metrics", get(metrics))
        .merge(detect::router())
        .merge(scoring::router())
        .merge(dashboard::router())
        .merge(alerts::router())
        .merge(analyses::router())
        .merge(settings::router())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env().expect("failed to load config");
    init_tracing(&config.log_level);
    tracing::info!(service = "vigil-api", "starting");

    let state = AppState::seeded(config.max_upload_bytes).expect("failed to seed repositories");
    let app = build_router(state, &config.cors_origins);
    let addr: SocketAddr = config.bind_addr().parse().expect("invalid bind address");

    tracing::info!(%addr, max_upload_bytes = config.max_upload_bytes, "listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server error");
}
