//! `tracing` subscriber setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_FILTER_ENV: &str = "SHOWROOM_LOG";

/// Install a fmt subscriber writing to stderr, filtered by `SHOWROOM_LOG`
/// (default `info`).
///
/// Safe to call more than once: only the first call installs a subscriber.
/// Returns whether this call did.
pub fn init_tracing() -> bool {
    init_tracing_with_default("info")
}

/// Like [`init_tracing`], with a caller-chosen default directive.
pub fn init_tracing_with_default(default_directive: &str) -> bool {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
