pub mod env;
pub mod tracing_init;

pub use env::{AppConfig, DEFAULT_MAX_UPLOAD_BYTES};
pub use tracing_init::init_tracing;
