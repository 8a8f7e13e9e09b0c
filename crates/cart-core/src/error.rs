//! Cart error types.

use thiserror::Error;

/// Errors that can occur in cart operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CartError {
    /// The product resolved to an empty name.
    #[error("Product name is missing")]
    MissingName,

    /// The product price is absent, not a number, or negative.
    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),

    /// Persisted storage could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The cart could not be serialized or deserialized.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Widget configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<cart_cache::CacheError> for CartError {
    fn from(e: cart_cache::CacheError) -> Self {
        CartError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for CartError {
    fn from(e: serde_json::Error) -> Self {
        CartError::Serialization(e.to_string())
    }
}
