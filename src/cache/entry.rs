//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

// == Cache Entry ==
/// Represents a single cache entry with value and access metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Last successful read, or the write that created the entry (Unix milliseconds)
    pub last_access: u64,
    /// Expiration timestamp (Unix milliseconds), None = no expiration
    pub expires_at: Option<u64>,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stamped at `now_ms`.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `now_ms` - Creation time in Unix milliseconds
    /// * `ttl_seconds` - TTL in seconds, `0` means the entry never expires
    pub fn new(value: V, now_ms: u64, ttl_seconds: u64) -> Self {
        let expires_at = if ttl_seconds == 0 {
            None
        } else {
            Some(now_ms.saturating_add(ttl_seconds.saturating_mul(1000)))
        };

        Self {
            value,
            last_access: now_ms,
            expires_at,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now_ms`.
    ///
    /// An entry is expired once `now_ms >= expires_at`, so a 5 second TTL
    /// created at t=0 is stale from t=5000 onward.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        match self.expires_at {
            Some(expires) => now_ms >= expires,
            None => false,
        }
    }

    // == Touch ==
    /// Records a successful read at `now_ms`.
    pub fn touch(&mut self, now_ms: u64) {
        self.last_access = now_ms;
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, or None if no expiration is set.
    ///
    /// # Returns
    /// - `Some(0)` if the entry has expired (TTL elapsed)
    /// - `Some(remaining_ms)` if the entry has TTL and hasn't expired
    /// - `None` if the entry has no TTL (never expires)
    pub fn ttl_remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.expires_at.map(|expires| expires.saturating_sub(now_ms))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation_no_ttl() {
        let entry = CacheEntry::new("test_value", 1_000, 0);

        assert_eq!(entry.value, "test_value");
        assert_eq!(entry.last_access, 1_000);
        assert!(entry.expires_at.is_none());
        assert!(!entry.is_expired(u64::MAX));
    }

    #[test]
    fn test_entry_creation_with_ttl() {
        let entry = CacheEntry::new("test_value", 1_000, 60);

        assert_eq!(entry.expires_at, Some(61_000));
        assert!(entry.expires_at.unwrap() >= entry.last_access);
        assert!(!entry.is_expired(1_000));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new(1u32, 0, 5);

        assert!(!entry.is_expired(4_999));
        assert!(entry.is_expired(5_000), "Entry should be expired at boundary");
        assert!(entry.is_expired(6_000));
    }

    #[test]
    fn test_touch_updates_last_access() {
        let mut entry = CacheEntry::new((), 100, 10);
        entry.touch(4_000);

        assert_eq!(entry.last_access, 4_000);
        // Expiry is fixed at creation
        assert_eq!(entry.expires_at, Some(10_100));
    }

    #[test]
    fn test_ttl_remaining() {
        let entry = CacheEntry::new((), 0, 10);

        assert_eq!(entry.ttl_remaining_ms(4_000), Some(6_000));
        assert_eq!(entry.ttl_remaining_ms(20_000), Some(0));
        assert!(CacheEntry::new((), 0, 0).ttl_remaining_ms(0).is_none());
    }

    #[test]
    fn test_huge_ttl_saturates() {
        let entry = CacheEntry::new((), u64::MAX - 10, u64::MAX);
        assert_eq!(entry.expires_at, Some(u64::MAX));
    }
}
