//! Logging setup
//!
//! Installs a tracing subscriber for hosts embedding the cache.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "monitor_cache=info";

/// Initializes a global fmt subscriber with an env filter.
///
/// Defaults to `monitor_cache=info` and can be overridden with `RUST_LOG`.
/// Returns false if a global subscriber was already installed.
pub fn init_tracing() -> bool {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
