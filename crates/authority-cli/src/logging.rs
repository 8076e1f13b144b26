use tracing_subscriber::EnvFilter;

/// Progress and diagnostics go to stderr so stdout stays parseable in `--json` mode.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
