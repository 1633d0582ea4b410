//! API Module
//!
//! PokeAPI access for the command loop.
//!
//! # Endpoints
//! - `GET /location-area?offset=&limit=` - Page through location areas
//! - `GET /location-area/{name}` - Creatures found in an area
//! - `GET /pokemon/{name}` - A single creature

pub mod client;
pub mod fetch;

pub use client::PokeApiClient;
pub use fetch::{Fetch, HttpFetcher};
