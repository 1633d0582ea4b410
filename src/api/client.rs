//! PokeAPI client
//!
//! Typed endpoints on top of a `Fetch` transport, with every response body
//! cached by URL in the shared `ExpiringCache`.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::api::Fetch;
use crate::cache::ExpiringCache;
use crate::error::Result;
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

/// Caching client for the PokeAPI.
#[derive(Debug)]
pub struct PokeApiClient<F> {
    fetcher: F,
    cache: Arc<ExpiringCache>,
    /// API root, no trailing slash
    base_url: String,
}

impl<F: Fetch> PokeApiClient<F> {
    /// Creates a client that caches responses in `cache`.
    pub fn new(fetcher: F, cache: Arc<ExpiringCache>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            fetcher,
            cache,
            base_url,
        }
    }

    pub fn location_areas_url(&self, offset: u32, limit: u32) -> String {
        format!(
            "{}/location-area?offset={}&limit={}",
            self.base_url, offset, limit
        )
    }

    pub fn location_area_url(&self, name: &str) -> String {
        format!("{}/location-area/{}", self.base_url, name)
    }

    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name)
    }

    /// One page of location areas starting at `offset`.
    pub async fn location_areas(&self, offset: u32, limit: u32) -> Result<LocationAreaPage> {
        self.get_json(&self.location_areas_url(offset, limit)).await
    }

    /// A single location area and its encounters.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        self.get_json(&self.location_area_url(name)).await
    }

    /// A single creature.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        self.get_json(&self.pokemon_url(name)).await
    }

    pub fn cache(&self) -> &Arc<ExpiringCache> {
        &self.cache
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Decodes the body for `url`, serving it from the cache when possible.
    ///
    /// A cached body that no longer decodes is refetched and replaced. A
    /// fresh body is only cached once it decodes.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        match self.cache.get(url).await {
            Some(cached) => match serde_json::from_slice(&cached) {
                Ok(value) => {
                    debug!("Cache hit: {}", url);
                    return Ok(value);
                }
                Err(e) => warn!("Cached body for {} failed to decode, refetching: {}", url, e),
            },
            None => debug!("Cache miss: {}", url),
        }

        let body = self.fetcher.fetch(url).await?;
        let value = serde_json::from_slice(&body)?;
        self.cache.add(url, body).await;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use crate::error::PokedexError;

    /// Serves canned bodies and counts every request
    #[derive(Default)]
    struct StubFetcher {
        bodies: HashMap<String, Vec<u8>>,
        calls: AtomicUsize,
    }

    impl StubFetcher {
        fn with(mut self, url: &str, body: &str) -> Self {
            self.bodies.insert(url.to_string(), body.as_bytes().to_vec());
            self
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Fetch for StubFetcher {
        async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.bodies
                .get(url)
                .cloned()
                .ok_or_else(|| PokedexError::Status {
                    url: url.to_string(),
                    status: 404,
                })
        }
    }

    const BASE: &str = "http://pokeapi.test/api/v2";
    const PIKACHU: &str = r#"{"id": 25, "name": "pikachu", "base_experience": 112}"#;

    fn client(fetcher: StubFetcher) -> PokeApiClient<StubFetcher> {
        let cache = Arc::new(ExpiringCache::new(Duration::from_secs(60)));
        PokeApiClient::new(fetcher, cache, format!("{}/", BASE))
    }

    #[tokio::test]
    async fn test_urls() {
        let client = client(StubFetcher::default());

        assert_eq!(
            client.location_areas_url(40, 20),
            "http://pokeapi.test/api/v2/location-area?offset=40&limit=20"
        );
        assert_eq!(
            client.location_area_url("canalave-city-area"),
            "http://pokeapi.test/api/v2/location-area/canalave-city-area"
        );
        assert_eq!(
            client.pokemon_url("pikachu"),
            "http://pokeapi.test/api/v2/pokemon/pikachu"
        );
    }

    #[tokio::test]
    async fn test_second_request_served_from_cache() {
        let url = format!("{}/pokemon/pikachu", BASE);
        let client = client(StubFetcher::default().with(&url, PIKACHU));

        let first = client.pokemon("pikachu").await.unwrap();
        let second = client.pokemon("pikachu").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(client.fetcher().calls(), 1);
        assert_eq!(client.cache().get(&url).await, Some(PIKACHU.as_bytes().to_vec()));

        client.cache().close().await;
    }

    #[tokio::test]
    async fn test_corrupt_cached_body_is_refetched() {
        let url = format!("{}/pokemon/pikachu", BASE);
        let client = client(StubFetcher::default().with(&url, PIKACHU));
        client.cache().add(url.clone(), b"{not json".to_vec()).await;

        let pokemon = client.pokemon("pikachu").await.unwrap();

        assert_eq!(pokemon.name, "pikachu");
        assert_eq!(client.fetcher().calls(), 1);
        assert_eq!(client.cache().get(&url).await, Some(PIKACHU.as_bytes().to_vec()));

        client.cache().close().await;
    }

    #[tokio::test]
    async fn test_undecodable_response_not_cached() {
        let url = format!("{}/pokemon/glitch", BASE);
        let client = client(StubFetcher::default().with(&url, "<html>oops</html>"));

        let result = client.pokemon("glitch").await;

        assert!(matches!(result, Err(PokedexError::Decode(_))));
        assert!(client.cache().get(&url).await.is_none());

        client.cache().close().await;
    }

    #[tokio::test]
    async fn test_fetch_error_propagates() {
        let client = client(StubFetcher::default());

        let result = client.location_area("nowhere").await;

        assert!(matches!(result, Err(PokedexError::Status { status: 404, .. })));
        assert!(client.cache().is_empty().await);

        client.cache().close().await;
    }
}
