// crates/core/src/logging.rs
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "UNIQ_LINES_LOG";

/// Filter used when [`LOG_ENV`] is unset or unparsable. Keeps stderr quiet.
pub const DEFAULT_FILTER: &str = "error";

/// Install the global subscriber. Diagnostics go to stderr only; stdout is data.
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
        .context("installing log subscriber")
}
