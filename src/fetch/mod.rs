//! Fetch Module
//!
//! Memoizing wrapper for backend JSON requests.
//!
//! A request is identified by its logical name, URL and query parameters.
//! The fetcher checks the cache before issuing the request and stores the
//! decoded response after a successful one.

mod fetcher;
mod key;
mod transport;

pub use fetcher::{shared_cache, CachedFetcher, SharedCache};
pub use key::request_key;
pub use transport::{HttpTransport, Transport};
