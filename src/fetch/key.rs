//! Request Key Builder
//!
//! Derives cache keys for backend requests.

use std::fmt::Write;

/// Builds the cache key for a named request.
///
/// The layout is `name^url#k1=v1&k2=v2&`. Parameters keep the caller's order,
/// so the same logical request must always pass them in the same order to
/// share a cache entry.
pub fn request_key(name: &str, url: &str, params: &[(&str, &str)]) -> String {
    let mut key = format!("{}^{}#", name, url);
    for (param, value) in params {
        // Writing to a String cannot fail
        let _ = write!(key, "{}={}&", param, value);
    }
    key
}
