//! `TtsClient` trait and HTTP implementation.
//!
//! Synthesis is an external collaborator: the client hands over
//! `(text, voice, rate)` and gets audio bytes back.  [`HttpTtsClient`] talks
//! to a local edge-tts bridge over HTTP; anything that accepts the same
//! request shape works.  All connection details come from [`TtsConfig`].

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::config::TtsConfig;

// ---------------------------------------------------------------------------
// TtsError
// ---------------------------------------------------------------------------

/// Errors that can occur during speech synthesis.
#[derive(Debug, Error)]
pub enum TtsError {
    /// HTTP transport or connection error.
    #[error("TTS request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("TTS request timed out")]
    Timeout,

    /// The service answered with a non-success status.
    #[error("TTS service returned HTTP {0}")]
    Status(u16),

    /// The service answered success but sent no audio.
    #[error("TTS service returned no audio")]
    EmptyAudio,
}

impl From<reqwest::Error> for TtsError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TtsError::Timeout
        } else if let Some(status) = e.status() {
            TtsError::Status(status.as_u16())
        } else {
            TtsError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// TtsClient trait
// ---------------------------------------------------------------------------

/// Async trait for speech synthesis backends.
///
/// Implementors must be `Send + Sync` so a single client can be shared by
/// the detached per-turn speaker tasks (`Arc<dyn TtsClient>`).
#[async_trait]
pub trait TtsClient: Send + Sync {
    /// Synthesize `text` with the given voice and rate adjustment,
    /// returning the encoded audio (MP3).
    async fn synthesize(&self, text: &str, voice: &str, rate: &str) -> Result<Vec<u8>, TtsError>;
}

// ---------------------------------------------------------------------------
// HttpTtsClient
// ---------------------------------------------------------------------------

/// Request body for the synthesis endpoint.
#[derive(Debug, Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
    voice: &'a str,
    rate: &'a str,
}

/// Calls an HTTP synthesis service (`POST {base_url}/api/tts`).
pub struct HttpTtsClient {
    client: reqwest::Client,
    config: TtsConfig,
}

impl HttpTtsClient {
    /// Build a client from application config.
    ///
    /// The HTTP client carries the per-request timeout from
    /// `config.timeout_secs`; a default client is the last-resort fallback
    /// if the builder fails.
    pub fn from_config(config: &TtsConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.clone(),
        }
    }

    fn synthesis_url(&self) -> String {
        format!("{}/api/tts", self.config.base_url)
    }
}

#[async_trait]
impl TtsClient for HttpTtsClient {
    async fn synthesize(&self, text: &str, voice: &str, rate: &str) -> Result<Vec<u8>, TtsError> {
        let body = SynthesisRequest { text, voice, rate };

        log::debug!(
            "synthesizing {} chars with voice {} at rate {}",
            text.chars().count(),
            voice,
            rate
        );

        let response = self
            .client
            .post(self.synthesis_url())
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let audio = response.bytes().await?.to_vec();
        if audio.is_empty() {
            return Err(TtsError::EmptyAudio);
        }

        Ok(audio)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
