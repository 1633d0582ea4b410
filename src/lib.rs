//! Pokedex - An interactive PokeAPI client
//!
//! Browses location areas, explores them and catches creatures, with every
//! API response held in a short-lived expiring cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod pokedex;
pub mod repl;
pub mod tasks;

pub use api::{HttpFetcher, PokeApiClient};
pub use cache::ExpiringCache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::Session;
