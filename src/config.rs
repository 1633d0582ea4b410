//! Configuration Module
//!
//! Handles loading client configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Default PokeAPI root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// PokeAPI root URL, without a trailing slash
    pub base_url: String,
    /// Cache TTL in seconds
    pub cache_ttl: u64,
    /// Sweep interval in milliseconds, None = same as the TTL
    pub sweep_interval_ms: Option<u64>,
    /// Location areas shown per `map` page
    pub page_size: u32,
    /// HTTP request timeout in seconds
    pub http_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEAPI_BASE_URL` - API root (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_CACHE_TTL_SECS` - Cache TTL in seconds (default: 5)
    /// - `POKEDEX_SWEEP_INTERVAL_MS` - Sweep interval in ms (default: the TTL)
    /// - `POKEDEX_PAGE_SIZE` - Location areas per page (default: 20)
    /// - `POKEDEX_HTTP_TIMEOUT_SECS` - Request timeout in seconds (default: 10)
    ///
    /// Values that fail to parse, and zero for the TTL, page size or
    /// timeout, fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.base_url),
            cache_ttl: parse_var("POKEDEX_CACHE_TTL_SECS")
                .filter(|v| *v > 0)
                .unwrap_or(defaults.cache_ttl),
            sweep_interval_ms: parse_var("POKEDEX_SWEEP_INTERVAL_MS")
                .filter(|v| *v > 0)
                .or(defaults.sweep_interval_ms),
            page_size: parse_var("POKEDEX_PAGE_SIZE")
                .filter(|v| *v > 0)
                .unwrap_or(defaults.page_size),
            http_timeout: parse_var("POKEDEX_HTTP_TIMEOUT_SECS")
                .filter(|v| *v > 0)
                .unwrap_or(defaults.http_timeout),
        }
    }

    /// Cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// Effective sweep interval as a Duration.
    pub fn sweep_interval(&self) -> Duration {
        self.sweep_interval_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| self.cache_ttl())
    }

    /// HTTP request timeout as a Duration.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_ttl: 5,
            sweep_interval_ms: None,
            page_size: 20,
            http_timeout: 10,
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
