//! Backend Transport
//!
//! The network seam used by the fetcher, with a reqwest-backed implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::config::CacheConfig;
use crate::error::{FetchError, Result};

/// Trait for JSON backends.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues a GET with the given query parameters and decodes the JSON body.
    async fn get_json(&self, url: &str, params: &[(&str, &str)]) -> Result<Value>;
}

// == HTTP Transport ==
/// JSON-over-HTTP transport backed by reqwest.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        Self::new(Duration::from_secs(config.fetch_timeout))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, url: &str, params: &[(&str, &str)]) -> Result<Value> {
        let response = self.client.get(url).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
