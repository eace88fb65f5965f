use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber. `EVENTPLAN_LOG` takes an `EnvFilter`
/// directive and defaults to `warn`.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env("EVENTPLAN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be installed, e.g. in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
