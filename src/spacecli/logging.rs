//! Diagnostics go to stderr through `tracing`, so they never mix with command
//! output. Quiet by default.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SPACECLI_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Filter from [`LOG_ENV`], else `RUST_LOG`, else warnings only.
pub fn filter() -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        filter
    } else if let Ok(filter) = EnvFilter::try_from_default_env() {
        filter
    } else {
        EnvFilter::new(DEFAULT_FILTER)
    }
}

pub fn init() {
    // Ignore error if a subscriber is already set (e.g. in tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .try_init();
}
