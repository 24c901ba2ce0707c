//! Tracing subscriber setup for hosts that don't install their own.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "fridgeboard=info";

/// Install a fmt subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once; returns false when a global subscriber was
/// already set.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
