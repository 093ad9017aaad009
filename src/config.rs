//! Configuration Module
//!
//! Handles loading cache and fetch settings from environment variables.

use std::env;

use serde::Deserialize;

/// Cache and fetch configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of entries the cache retains
    pub capacity: usize,
    /// Default TTL in seconds, 0 = entries never expire by age
    pub default_ttl: u64,
    /// Timeout in seconds for a single backend request
    pub fetch_timeout: u64,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 100)
    /// - `CACHE_DEFAULT_TTL` - Default TTL in seconds (default: 60)
    /// - `FETCH_TIMEOUT` - Backend request timeout in seconds (default: 15)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            capacity: env_or("CACHE_CAPACITY", defaults.capacity),
            default_ttl: env_or("CACHE_DEFAULT_TTL", defaults.default_ttl),
            fetch_timeout: env_or("FETCH_TIMEOUT", defaults.fetch_timeout),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 100,
            default_ttl: 60,
            fetch_timeout: 15,
        }
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests below mutate process-wide env vars
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("CACHE_CAPACITY");
        env::remove_var("CACHE_DEFAULT_TTL");
        env::remove_var("FETCH_TIMEOUT");
    }

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.capacity, 100);
        assert_eq!(config.default_ttl, 60);
        assert_eq!(config.fetch_timeout, 15);
    }

    #[test]
    fn test_config_from_env_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        assert_eq!(CacheConfig::from_env(), CacheConfig::default());
    }

    #[test]
    fn test_config_from_env_overrides() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::set_var("CACHE_CAPACITY", "25");
        env::set_var("CACHE_DEFAULT_TTL", "0");
        env::set_var("FETCH_TIMEOUT", "3");

        let config = CacheConfig::from_env();
        clear_env();

        assert_eq!(config.capacity, 25);
        assert_eq!(config.default_ttl, 0);
        assert_eq!(config.fetch_timeout, 3);
    }

    #[test]
    fn test_config_from_env_unparsable_falls_back() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::set_var("CACHE_CAPACITY", "lots");
        env::set_var("CACHE_DEFAULT_TTL", "-5");
        env::set_var("FETCH_TIMEOUT", "7");

        let config = CacheConfig::from_env();
        clear_env();

        assert_eq!(config.capacity, 100);
        assert_eq!(config.default_ttl, 60);
        assert_eq!(config.fetch_timeout, 7);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: CacheConfig = serde_json::from_str(r#"{"capacity": 8}"#).unwrap();
        assert_eq!(config.capacity, 8);
        assert_eq!(config.default_ttl, 60);
        assert_eq!(config.fetch_timeout, 15);
    }
}
