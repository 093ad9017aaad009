//! LRU Tracker Module
//!
//! Implements Least Recently Used tracking for cache eviction.

use std::collections::{BTreeMap, HashMap};

/// Position of a key in the eviction order: `(last_access_ms, touch_sequence)`.
type Rank = (u64, u64);

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Keys are ordered by their last access timestamp. Keys touched at the same
/// millisecond are ordered by touch sequence, so the one touched first is
/// evicted first. Touch, remove and evict are all O(log n).
#[derive(Debug, Default)]
pub struct LruTracker {
    /// Keys by rank, smallest rank = least recently used
    order: BTreeMap<Rank, String>,
    /// Current rank of every tracked key
    ranks: HashMap<String, Rank>,
    /// Monotonic counter for tie-breaking equal timestamps
    next_seq: u64,
}

impl LruTracker {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // == Touch ==
    /// Marks a key as accessed at `now_ms`.
    ///
    /// If key exists, its previous position is dropped first.
    pub fn touch(&mut self, key: &str, now_ms: u64) {
        let rank = (now_ms, self.next_seq);
        self.next_seq += 1;

        if let Some(old) = self.ranks.insert(key.to_string(), rank) {
            self.order.remove(&old);
        }
        self.order.insert(rank, key.to_string());
    }

    // == Remove ==
    /// Removes a key from the tracker.
    pub fn remove(&mut self, key: &str) {
        if let Some(rank) = self.ranks.remove(key) {
            self.order.remove(&rank);
        }
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        let (_, key) = self.order.pop_first()?;
        self.ranks.remove(&key);
        Some(key)
    }

    // == Clear ==
    pub fn clear(&mut self) {
        self.order.clear();
        self.ranks.clear();
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}
