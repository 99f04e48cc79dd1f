//! FinBERT Sentiment - Financial Sentiment Analysis Client
//!
//! This crate provides a minimal client for the FinBERT financial-sentiment
//! model served through the Hugging Face Inference API, together with a
//! standalone validator for user-supplied text.
//!
//! The two components are independent: callers are expected to run the
//! validator first and only send text that passed.
//!
//! # Modules
//!
//! - `validation`: input constraints for user-supplied text
//! - `api`: Hugging Face Inference API client and response schema check
//! - `sentiment`: normalized analysis results and analyzer backends
//! - `error`: crate error type
//!
//! # Example
//!
//! ```rust,no_run
//! use finbert_sentiment::{analyze_sentiment, validate_input};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let text = "Stocks are up!";
//!
//!     if let Some(message) = validate_input(text) {
//!         eprintln!("{}", message);
//!         return Ok(());
//!     }
//!
//!     let analysis = analyze_sentiment(text, "hf_your_token").await?;
//!     println!("{}: {} ({:.2})", analysis.text, analysis.label, analysis.score);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod error;
pub mod sentiment;
pub mod validation;

// Re-exports for convenience
pub use api::{Classification, HuggingFaceClient};
pub use error::{Error, Result};
pub use sentiment::{
    analyze_sentiment, Analysis, MockSentimentBackend, Sentiment, SentimentAnalyzer,
    SentimentBackend,
};
pub use validation::{validate_input, MAX_INPUT_CHARS};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
