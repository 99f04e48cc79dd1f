//! Financial sentiment analysis.
//!
//! Normalizes raw model classifications into an [`Analysis`] and exposes an
//! analyzer with pluggable backends: the hosted FinBERT model behind the
//! Hugging Face Inference API, and a keyword-based mock for tests and demos.

use crate::api::{Classification, HuggingFaceClient};
use crate::error::{Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sentiment categories produced by FinBERT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Parse a model label, case-insensitively.
    ///
    /// Returns `None` for labels outside the three known categories.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_uppercase().as_str() {
            "POSITIVE" => Some(Sentiment::Positive),
            "NEUTRAL" => Some(Sentiment::Neutral),
            "NEGATIVE" => Some(Sentiment::Negative),
            _ => None,
        }
    }

    /// The label string as it appears in an [`Analysis`]
    pub fn as_label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "POSITIVE",
            Sentiment::Neutral => "NEUTRAL",
            Sentiment::Negative => "NEGATIVE",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// Result of a sentiment classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// The analyzed text, unmodified
    pub text: String,
    /// Uppercased label of the best classification.
    ///
    /// Expected to be one of POSITIVE, NEUTRAL, NEGATIVE, but the model's
    /// label is passed through without a runtime check; use
    /// [`sentiment`](Self::sentiment) for a validated view.
    pub label: String,
    /// Confidence of the best classification (0.0 to 1.0)
    pub score: f64,
}

impl Analysis {
    /// Select the best classification and normalize it.
    ///
    /// Entries are sorted by descending score (the sort is stable, so on a
    /// tie the first maximal entry in response order wins) and the winner's
    /// label is uppercased. An empty entry list counts as a malformed
    /// response.
    pub fn from_classifications(
        text: &str,
        mut classifications: Vec<Classification>,
    ) -> Result<Self> {
        classifications.sort_by(|a, b| b.score.total_cmp(&a.score));
        let best = classifications
            .into_iter()
            .next()
            .ok_or(Error::InvalidResponse)?;

        Ok(Self {
            text: text.to_string(),
            label: best.label.to_uppercase(),
            score: best.score,
        })
    }

    /// The label as a typed [`Sentiment`], or `None` for unexpected labels
    pub fn sentiment(&self) -> Option<Sentiment> {
        Sentiment::from_label(&self.label)
    }
}

/// Analyze a text with the hosted FinBERT model.
///
/// Performs one POST to the inference endpoint; the token is the bearer
/// credential for this single request. Callers should run
/// [`validate_input`](crate::validation::validate_input) first.
pub async fn analyze_sentiment(text: &str, token: &str) -> Result<Analysis> {
    HuggingFaceClient::new().analyze(text, token).await
}

/// Trait for sentiment analyzer backends
#[async_trait]
pub trait SentimentBackend: Send + Sync {
    /// Analyze the sentiment of a single text
    async fn analyze(&self, text: &str, token: &str) -> Result<Analysis>;

    /// Get the backend name
    fn name(&self) -> &str;
}

/// Sentiment analyzer with a pluggable backend
pub struct SentimentAnalyzer {
    backend: Box<dyn SentimentBackend>,
}

impl SentimentAnalyzer {
    /// Analyzer backed by the hosted FinBERT model
    pub fn new_huggingface() -> Self {
        Self {
            backend: Box::new(HuggingFaceClient::new()),
        }
    }

    /// Analyzer backed by the keyword mock (no credentials needed)
    pub fn new_mock() -> Self {
        Self {
            backend: Box::new(MockSentimentBackend::new()),
        }
    }

    /// Analyzer with a custom backend
    pub fn with_backend(backend: Box<dyn SentimentBackend>) -> Self {
        Self { backend }
    }

    /// Analyze sentiment of a text
    pub async fn analyze(&self, text: &str, token: &str) -> Result<Analysis> {
        self.backend.analyze(text, token).await
    }

    /// Get backend name
    pub fn name(&self) -> &str {
        self.backend.name()
    }
}

#[async_trait]
impl SentimentBackend for HuggingFaceClient {
    async fn analyze(&self, text: &str, token: &str) -> Result<Analysis> {
        HuggingFaceClient::analyze(self, text, token).await
    }

    fn name(&self) -> &str {
        "HuggingFace"
    }
}

/// Mock sentiment backend for tests and demos.
///
/// Serves predefined responses when registered, falling back to a simple
/// financial keyword count. The token is ignored.
pub struct MockSentimentBackend {
    responses: HashMap<String, Analysis>,
}

impl MockSentimentBackend {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
        }
    }

    /// Add a predefined response for an exact text
    pub fn add_response(&mut self, text: &str, analysis: Analysis) {
        self.responses.insert(text.to_string(), analysis);
    }

    fn classify_keywords(&self, text: &str) -> (Sentiment, f64) {
        let text_lower = text.to_lowercase();

        let positive_keywords = [
            "beat", "surge", "record", "growth", "profit", "success",
            "breakthrough", "bullish", "rally", "gain", "soar", "exceed",
            "outperform", "strong", "upgrade", "buy",
        ];

        let negative_keywords = [
            "miss", "drop", "fall", "decline", "loss", "fail", "crash",
            "bearish", "plunge", "cut", "layoff", "weak", "downgrade",
            "sell", "warning", "concern", "risk",
        ];

        let positive_count = positive_keywords
            .iter()
            .filter(|k| text_lower.contains(*k))
            .count();

        let negative_count = negative_keywords
            .iter()
            .filter(|k| text_lower.contains(*k))
            .count();

        let total = positive_count + negative_count;
        if total == 0 {
            return (Sentiment::Neutral, 0.5);
        }

        let margin = (positive_count as f64 - negative_count as f64) / total as f64;
        let sentiment = if margin > 0.0 {
            Sentiment::Positive
        } else if margin < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        };

        (sentiment, 0.5 + margin.abs() * 0.45)
    }
}

impl Default for MockSentimentBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SentimentBackend for MockSentimentBackend {
    async fn analyze(&self, text: &str, _token: &str) -> Result<Analysis> {
        if let Some(analysis) = self.responses.get(text) {
            return Ok(analysis.clone());
        }

        let (sentiment, score) = self.classify_keywords(text);
        Ok(Analysis {
            text: text.to_string(),
            label: sentiment.as_label().to_string(),
            score,
        })
    }

    fn name(&self) -> &str {
        "Mock"
    }
}
