//! Error types for the fetch layer
//!
//! The cache itself is total and never fails; only backend requests can.

use thiserror::Error;

// == Fetch Error Enum ==
/// Failure of a memoized backend request.
#[derive(Error, Debug)]
pub enum FetchError {
    /// No URL was given, so no request was issued
    #[error("Request '{0}' has no URL")]
    EmptyUrl(String),

    /// Transport-level failure (connection, timeout, TLS)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Backend returned {status} for {url}")]
    Status { status: u16, url: String },

    /// Response body was not valid JSON
    #[error("Invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the fetch layer.
pub type Result<T> = std::result::Result<T, FetchError>;
