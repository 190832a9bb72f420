//! Core `LlmClient` trait and `OllamaClient` implementation.
//!
//! `OllamaClient` calls the Ollama native `/api/generate` endpoint with a
//! flat prompt.  All connection details come from [`LlmConfig`]; nothing is
//! hardcoded.  A failed call is never fatal — the dialogue driver substitutes
//! a canned apology and the turn continues.

use async_trait::async_trait;
use thiserror::Error;

use crate::config::LlmConfig;

// ---------------------------------------------------------------------------
// LlmError
// ---------------------------------------------------------------------------

/// Errors that can occur while querying the language model.
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP transport or connection error.
    #[error("LLM request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("LLM request timed out")]
    Timeout,

    /// The endpoint answered with a non-success status.
    #[error("LLM endpoint returned HTTP {0}")]
    Status(u16),

    /// The HTTP response could not be parsed as expected JSON.
    #[error("failed to parse LLM response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LlmError::Timeout
        } else if let Some(status) = e.status() {
            LlmError::Status(status.as_u16())
        } else {
            LlmError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// LlmClient trait
// ---------------------------------------------------------------------------

/// Async trait for LLM backends.
///
/// Implementors must be `Send + Sync` so they can be shared across turns
/// (e.g. wrapped in `Arc<dyn LlmClient>`).
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send `prompt` and return the model's reply text, trimmed.
    ///
    /// An empty reply is `Ok("")` — deciding what to say instead is the
    /// normaliser's job, not a transport error.
    async fn ask(&self, prompt: &str) -> Result<String, LlmError>;
}

// ---------------------------------------------------------------------------
// OllamaClient
// ---------------------------------------------------------------------------

/// Calls the Ollama native `/api/generate` endpoint.
///
/// Request shape:
/// `{ model, prompt, stream: false, options: { temperature, top_p } }`;
/// the reply text is the `response` field of the returned JSON.
pub struct OllamaClient {
    client: reqwest::Client,
    config: LlmConfig,
}

impl OllamaClient {
    /// Build an `OllamaClient` from application config.
    ///
    /// The HTTP client is pre-configured with the per-request timeout from
    /// `config.timeout_secs`.  A default (no-timeout) client is used as a
    /// last-resort fallback if the builder fails (should never happen in
    /// practice).
    pub fn from_config(config: &LlmConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.clone(),
        }
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.config.base_url)
    }
}

#[async_trait]
impl LlmClient for OllamaClient {
    async fn ask(&self, prompt: &str) -> Result<String, LlmError> {
        let body = serde_json::json!({
            "model":  self.config.model,
            "prompt": prompt,
            "stream": false,
            "options": {
                "temperature": self.config.temperature,
                "top_p":       self.config.top_p,
            }
        });

        let response = self
            .client
            .post(self.generate_url())
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        // A missing `response` field degrades to the empty string; the
        // normaliser turns that into the canned apology.
        Ok(json["response"].as_str().unwrap_or_default().trim().to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
