use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber. Falls back to `info` when the filter
/// directive does not parse; a second call is a no-op.
pub fn init(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}
