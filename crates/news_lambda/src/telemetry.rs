use tracing_subscriber::EnvFilter;

/// Installs JSON line logging for a function process.
///
/// Level comes from `RUST_LOG` and defaults to `info`. Timestamps are left to
/// CloudWatch ingestion.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
