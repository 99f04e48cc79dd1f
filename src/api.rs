//! Hugging Face Inference API client.
//!
//! Thin wrapper around the hosted inference endpoint: one POST per call,
//! bearer authentication with a caller-supplied token, and an explicit
//! schema check on the duck-typed response body.

use crate::error::{Error, Result};
use crate::sentiment::Analysis;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default inference API host
const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

/// Default sentiment model
const DEFAULT_MODEL: &str = "ProsusAI/finbert";

/// A single classification entry from the model response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    pub score: f64,
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

/// Client for the Hugging Face Inference API
pub struct HuggingFaceClient {
    client: Client,
    base_url: String,
    model: String,
}

impl HuggingFaceClient {
    /// Create a client for the default FinBERT model.
    ///
    /// No timeout is applied; an unresponsive endpoint holds the call open
    /// until the surrounding environment imposes a limit. Use
    /// [`with_http_client`](Self::with_http_client) to supply a transport
    /// with its own policy.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Set a custom model id (any hosted text-classification model)
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Set a custom base URL (for compatible or self-hosted endpoints)
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Use a pre-built `reqwest::Client` (timeouts, proxies, etc.)
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    fn inference_url(&self) -> String {
        format!("{}/models/{}", self.base_url, self.model)
    }

    /// Run the model on a text and return the raw classification entries.
    ///
    /// The token is used for the `Authorization` header of this one request
    /// and nothing else; it is never stored or logged.
    pub async fn classify(&self, text: &str, token: &str) -> Result<Vec<Classification>> {
        let response = self
            .client
            .post(self.inference_url())
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .json(&InferenceRequest { inputs: text })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::Api(format!(
                "Hugging Face API error ({}): {}",
                status, error_text
            )));
        }

        let body: Value = response.json().await?;
        let classifications = parse_classifications(&body)?;

        tracing::debug!(
            model = %self.model,
            entries = classifications.len(),
            "inference round trip complete"
        );

        Ok(classifications)
    }

    /// Classify a text and normalize the result into an [`Analysis`]
    pub async fn analyze(&self, text: &str, token: &str) -> Result<Analysis> {
        let classifications = self.classify(text, token).await?;
        Analysis::from_classifications(text, classifications)
    }
}

impl Default for HuggingFaceClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate the response shape and extract the classification entries.
///
/// The endpoint returns an array containing one array of `{label, score}`
/// objects. Anything else fails with [`Error::InvalidResponse`]; no further
/// interpretation is attempted.
pub fn parse_classifications(body: &Value) -> Result<Vec<Classification>> {
    let outer = body.as_array().ok_or(Error::InvalidResponse)?;
    let entries = outer
        .first()
        .and_then(Value::as_array)
        .ok_or(Error::InvalidResponse)?;

    entries
        .iter()
        .map(|entry| {
            let label = entry["label"].as_str().ok_or(Error::InvalidResponse)?;
            let score = entry["score"].as_f64().ok_or(Error::InvalidResponse)?;
            Ok(Classification {
                label: label.to_string(),
                score,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_valid_response() {
        let body = json!([[
            { "label": "positive", "score": 0.9 },
            { "label": "negative", "score": 0.1 }
        ]]);

        let classifications = parse_classifications(&body).unwrap();
        assert_eq!(classifications.len(), 2);
        assert_eq!(classifications[0].label, "positive");
        assert_eq!(classifications[0].score, 0.9);
    }

    #[test]
    fn test_top_level_not_an_array() {
        let body = json!({});
        assert!(matches!(
            parse_classifications(&body),
            Err(Error::InvalidResponse)
        ));
    }

    #[test]
    fn test_first_element_not_an_array() {
        let body = json!([{ "label": "positive", "score": 0.9 }]);
        assert!(matches!(
            parse_classifications(&body),
            Err(Error::InvalidResponse)
        ));
    }

    #[test]
    fn test_empty_top_level_array() {
        let body = json!([]);
        assert!(matches!(
            parse_classifications(&body),
            Err(Error::InvalidResponse)
        ));
    }

    #[test]
    fn test_entry_missing_score() {
        let body = json!([[{ "label": "positive" }]]);
        assert!(matches!(
            parse_classifications(&body),
            Err(Error::InvalidResponse)
        ));
    }

    #[test]
    fn test_default_endpoint() {
        let client = HuggingFaceClient::new();
        assert_eq!(
            client.inference_url(),
            "https://api-inference.huggingface.co/models/ProsusAI/finbert"
        );
    }

    #[test]
    fn test_builder_overrides() {
        let client = HuggingFaceClient::new()
            .with_base_url("https://example.com/")
            .with_model("some/other-model");
        assert_eq!(
            client.inference_url(),
            "https://example.com/models/some/other-model"
        );
    }
}
