use tracing_subscriber::EnvFilter;

/// Logs go to stderr so they never interleave with shell output.
/// `RUST_LOG` overrides the default `warn` level.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
