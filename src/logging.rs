use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. Filter comes from `MINIMAL_NOTES_LOG`
/// (e.g. `minimal_notes=debug`), falling back to warnings only.
pub fn init() {
    let filter = EnvFilter::try_from_env("MINIMAL_NOTES_LOG")
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));
    // A subscriber may already be set when the library is embedded.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
