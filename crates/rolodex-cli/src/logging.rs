//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Filter used with `--verbose`.
pub const VERBOSE_FILTER: &str = "debug";

/// Choose the log filter: `--verbose` wins, then `RUST_LOG`, then the
/// configured level.
pub fn filter(configured: &str, verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_FILTER);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured))
}

/// Install the global fmt subscriber.
pub fn init(configured: &str, verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(configured, verbose))
        .init();
}
