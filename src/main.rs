//! Pokedex - An interactive PokeAPI client
//!
//! Browses location areas, explores them and catches creatures, with every
//! API response held in a short-lived expiring cache.

use std::sync::Arc;

use anyhow::Context;
use tokio::io::{self, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{repl, Config, ExpiringCache, HttpFetcher, PokeApiClient, Session};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the expiring cache, which starts its sweep task
/// 4. Build the HTTP client and session
/// 5. Run the command loop on stdin/stdout
/// 6. Close the cache so the sweep task exits before shutdown
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs don't interleave with the prompt;
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: base_url={}, cache_ttl={}s, sweep_interval={:?}, page_size={}",
        config.base_url,
        config.cache_ttl,
        config.sweep_interval(),
        config.page_size
    );

    let cache = Arc::new(ExpiringCache::with_sweep_interval(
        config.cache_ttl(),
        config.sweep_interval(),
    ));
    info!("Response cache initialized");

    let fetcher =
        HttpFetcher::new(config.http_timeout()).context("failed to build the HTTP client")?;
    let client = PokeApiClient::new(fetcher, cache.clone(), config.base_url.clone());
    let mut session = Session::new(client, config.page_size);

    let stdin = BufReader::new(io::stdin());
    let mut stdout = io::stdout();
    let result = repl::run(&mut session, stdin, &mut stdout).await;

    cache.close().await;
    info!("Pokedex shutdown complete");

    result.context("command loop failed")
}
