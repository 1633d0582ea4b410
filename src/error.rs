//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex client.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// The HTTP request could not be sent or its body read
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    /// The response body was not the JSON we expected
    #[error("Could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The first word of the input is not a known command
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// A command that needs an argument was given none
    #[error("Usage: {0}")]
    MissingArgument(&'static str),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;
