use serde::Deserialize;
use std::env;
use vigil_common::error::{VigilError, VigilResult};

/// Default upload ceiling: 10 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub max_upload_bytes: usize,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    /// Loads `.env` file if present; every variable has a default.
    pub fn from_env() -> VigilResult<Self> {
        // Best-effort .env load; ignore if missing
        let _ = dotenvy::dotenv();

        Ok(Self {
            host: get_var_or("HOST", "0.0.0.0"),
            port: get_var_or("PORT", "8080")
                .parse()
                .map_err(|e| VigilError::Config(format!("invalid PORT: {e}")))?,
            log_level: get_var_or("LOG_LEVEL", "info"),
            max_upload_bytes: get_var_or("MAX_UPLOAD_BYTES", &DEFAULT_MAX_UPLOAD_BYTES.to_string())
                .parse()
                .map_err(|e| VigilError::Config(format!("invalid MAX_UPLOAD_BYTES: {e}")))?,
            cors_origins: parse_list(&get_var_or("CORS_ORIGINS", DEFAULT_CORS_ORIGINS)),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn get_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
