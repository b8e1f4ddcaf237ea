use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `TAGLOG_LOG=debug`
pub const LOG_ENV_VAR: &str = "TAGLOG_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber
///
/// Logs go to stderr so they never end up in the pager or in piped output.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
