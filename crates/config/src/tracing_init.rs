use tracing_subscriber::{fmt, EnvFilter};

/// Build the log filter: `RUST_LOG` wins, then `LOG_LEVEL`, then `default_level`.
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env("RUST_LOG")
        .or_else(|_| EnvFilter::try_from_env("LOG_LEVEL"))
        .unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global fmt subscriber. A second call is a no-op.
pub fn init_tracing(default_level: &str) {
    let _ = fmt()
        .with_env_filter(build_filter(default_level))
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        init_tracing("warn");
        init_tracing("debug");
    }

    #[test]
    fn default_filter_is_used_when_env_is_unset() {
        if std::env::var("RUST_LOG").is_ok() || std::env::var("LOG_LEVEL").is_ok() {
            return;
        }
        let filter = build_filter("debug");
        assert_eq!(filter.to_string(), "debug");
    }
}
