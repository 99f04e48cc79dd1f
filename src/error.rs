//! Error types for the FinBERT sentiment client

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// The inference endpoint answered with a non-success status
    #[error("API request failed: {0}")]
    Api(String),

    /// The response body did not match the expected nested-array shape
    #[error("Invalid response from API")]
    InvalidResponse,

    /// Network failure from the underlying transport, propagated unchanged
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
