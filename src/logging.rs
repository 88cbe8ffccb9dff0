//! Tracing setup
//!
//! Log output goes to stderr so that ladders printed on stdout stay machine-readable.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "WORD_LADDER_LOG";

/// Initialize the global tracing subscriber
///
/// `WORD_LADDER_LOG` wins when set; otherwise the level is `debug` with `verbose`
/// and `warn` without. Calling this twice is harmless.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
    {
        tracing::debug!(error = %e, "tracing subscriber already installed");
    }
}
