//! Diagnostic logging setup

use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding `tracing` filter directives.
pub const LOG_ENV: &str = "GROVE_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install a stderr subscriber. Calling this more than once is harmless.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
