//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with LRU tracking and lazy TTL expiration.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::cache::{CacheEntry, CacheStats, Clock, LruTracker, SystemClock};
use crate::config::CacheConfig;

// == Bounded TTL Cache ==
/// In-memory cache bounded by entry count, with optional per-entry TTL.
///
/// When a new key would push the cache over capacity, the entry with the
/// oldest `last_access` is evicted first. Expiry is checked lazily on `get`;
/// nothing runs in the background, so an expired entry that is never looked up
/// again stays until evicted or cleared.
///
/// The cache is not synchronized. Share it across threads behind a lock
/// (see [`crate::fetch::SharedCache`]).
#[derive(Debug)]
pub struct BoundedTtlCache<V, C: Clock = SystemClock> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// LRU access tracker
    lru: LruTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries retained
    capacity: usize,
    /// TTL in seconds applied by `add`, 0 = never expire
    default_ttl: u64,
    clock: C,
}

impl<V> BoundedTtlCache<V, SystemClock> {
    // == Constructor ==
    /// Creates a new cache on the system clock.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries; 0 makes every `add` a no-op eviction
    /// * `default_ttl` - TTL in seconds for `add`; 0 means entries never expire by age
    pub fn new(capacity: usize, default_ttl: u64) -> Self {
        Self::with_clock(capacity, default_ttl, SystemClock)
    }

    /// Creates a cache from configuration.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.capacity, config.default_ttl)
    }
}

impl<V, C: Clock> BoundedTtlCache<V, C> {
    /// Creates a new cache driven by the given clock.
    pub fn with_clock(capacity: usize, default_ttl: u64, clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(capacity),
            capacity,
            default_ttl,
            clock,
        }
    }

    // == Add ==
    /// Stores a value under `key` using the default TTL.
    ///
    /// Overwriting an existing key replaces its value and resets both its
    /// access time and its expiry. Never fails.
    pub fn add(&mut self, key: impl Into<String>, value: V) {
        let ttl = self.default_ttl;
        self.add_with_ttl(key, value, ttl);
    }

    // == Add With TTL ==
    /// Stores a value under `key` with an explicit TTL in seconds (0 = never expire).
    pub fn add_with_ttl(&mut self, key: impl Into<String>, value: V, ttl: u64) {
        let key = key.into();

        if self.capacity == 0 {
            // Inserted and immediately evicted
            self.stats.record_eviction();
            debug!("Cache has zero capacity, dropped '{}'", key);
            return;
        }

        // Only new keys can push the cache over capacity
        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            self.evict_oldest();
        }

        let now = self.clock.now_ms();
        self.entries.insert(key.clone(), CacheEntry::new(value, now, ttl));
        self.lru.touch(&key, now);
        self.stats.set_total_entries(self.entries.len());

        debug!("Cached '{}' (ttl={}s)", key, ttl);
    }

    // == Get ==
    /// Looks up `key`, refreshing its access time on a hit.
    ///
    /// Returns None when the key is absent or its TTL has elapsed. Expired
    /// entries are removed as part of the lookup.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        let now = self.clock.now_ms();

        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(now),
            None => {
                self.stats.record_miss();
                debug!("Cache miss for '{}'", key);
                return None;
            }
        };

        if expired {
            self.entries.remove(key);
            self.lru.remove(key);
            self.stats.record_miss();
            self.stats.record_expiration();
            self.stats.set_total_entries(self.entries.len());
            debug!("Cache entry '{}' expired", key);
            return None;
        }

        self.stats.record_hit();
        self.lru.touch(key, now);
        let entry = self.entries.get_mut(key)?;
        entry.touch(now);
        debug!(
            "Cache hit for '{}' (ttl_remaining_ms={:?})",
            key,
            entry.ttl_remaining_ms(now)
        );
        Some(&entry.value)
    }

    // == Contains Key ==
    /// Checks whether `key` holds a live entry, without refreshing it or
    /// touching statistics.
    pub fn contains_key(&self, key: &str) -> bool {
        let now = self.clock.now_ms();
        self.entries
            .get(key)
            .is_some_and(|entry| !entry.is_expired(now))
    }

    // == Remove ==
    /// Removes an entry by key, returning its value if present.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let entry = self.entries.remove(key)?;
        self.lru.remove(key);
        self.stats.set_total_entries(self.entries.len());
        Some(entry.value)
    }

    // == Clear ==
    /// Removes every entry. Statistics counters are kept.
    pub fn clear(&mut self) {
        let count = self.entries.len();
        self.entries.clear();
        self.lru.clear();
        self.stats.set_total_entries(0);
        info!("Cache cleared, dropped {} entries", count);
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Returns the current number of entries, including expired ones not yet looked up.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Default TTL in seconds.
    pub fn default_ttl(&self) -> u64 {
        self.default_ttl
    }

    // == Evict Oldest ==
    fn evict_oldest(&mut self) {
        if let Some(evicted) = self.lru.evict_oldest() {
            self.entries.remove(&evicted);
            self.stats.record_eviction();
            debug!("Evicted least recently used '{}'", evicted);
        }
    }
}
