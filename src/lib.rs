//! Monitor Cache - bounded in-memory memoization for dashboard fetches
//!
//! Provides a string-keyed cache with lazy TTL expiration and LRU eviction,
//! plus a fetch wrapper that serves repeated backend requests from it.

pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;

pub use cache::{BoundedTtlCache, CacheStats, Clock, MockClock, SystemClock};
pub use config::CacheConfig;
pub use error::{FetchError, Result};
pub use fetch::{shared_cache, CachedFetcher, HttpTransport, SharedCache, Transport};
pub use logging::init_tracing;
