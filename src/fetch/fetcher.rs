//! Cached Fetcher
//!
//! Memoizes backend JSON requests through a shared bounded TTL cache.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::key::request_key;
use super::transport::{HttpTransport, Transport};
use crate::cache::{BoundedTtlCache, Clock, SystemClock};
use crate::config::CacheConfig;
use crate::error::{FetchError, Result};

/// Cache of decoded responses, shareable between fetchers and tasks.
pub type SharedCache<C = SystemClock> = Arc<RwLock<BoundedTtlCache<Value, C>>>;

/// Wraps a cache for sharing.
pub fn shared_cache<C: Clock>(cache: BoundedTtlCache<Value, C>) -> SharedCache<C> {
    Arc::new(RwLock::new(cache))
}

// == Cached Fetcher ==
/// Serves repeated identical requests from the cache and only hits the
/// backend on a miss. Failed requests are never cached.
pub struct CachedFetcher<T: Transport, C: Clock = SystemClock> {
    cache: SharedCache<C>,
    transport: T,
}

impl CachedFetcher<HttpTransport, SystemClock> {
    /// Builds an HTTP fetcher with its own cache from configuration.
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        let transport = HttpTransport::from_config(config)?;
        let cache = shared_cache(BoundedTtlCache::from_config(config));
        info!(
            "Cached fetcher ready: capacity={}, default_ttl={}s, timeout={}s",
            config.capacity, config.default_ttl, config.fetch_timeout
        );
        Ok(Self::new(cache, transport))
    }
}

impl<T: Transport, C: Clock> CachedFetcher<T, C> {
    pub fn new(cache: SharedCache<C>, transport: T) -> Self {
        Self { cache, transport }
    }

    /// The cache backing this fetcher.
    pub fn cache(&self) -> &SharedCache<C> {
        &self.cache
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // == Fetch ==
    /// Returns the response for a named request, from cache when possible.
    ///
    /// # Arguments
    /// * `name` - Logical request name, part of the cache key
    /// * `url` - Backend URL; empty URLs are rejected without a request
    /// * `params` - Query parameters, in a stable order
    pub async fn fetch(&self, name: &str, url: &str, params: &[(&str, &str)]) -> Result<Value> {
        if url.is_empty() {
            return Err(FetchError::EmptyUrl(name.to_string()));
        }

        let key = request_key(name, url, params);

        let cached = {
            let mut cache = self.cache.write().await;
            cache.get(&key).cloned()
        };
        if let Some(value) = cached {
            debug!("Serving '{}' from cache", name);
            return Ok(value);
        }

        let value = match self.transport.get_json(url, params).await {
            Ok(value) => value,
            Err(err) => {
                warn!("Request '{}' to {} failed: {}", name, url, err);
                return Err(err);
            }
        };

        self.cache.write().await.add(key, value.clone());
        Ok(value)
    }
}
