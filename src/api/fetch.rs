//! HTTP transport
//!
//! The client talks to the network only through the `Fetch` trait so the
//! command loop can be driven against canned payloads in tests.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::error::{PokedexError, Result};

/// Performs a GET and returns the raw response body.
pub trait Fetch: Send + Sync {
    /// Fetches `url`. Non-success statuses are reported as
    /// [`PokedexError::Status`].
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// `Fetch` implementation backed by a reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Builds a fetcher whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        debug!("GET {} -> {} bytes", url, body.len());
        Ok(body.to_vec())
    }
}
