//! LLM collaborator: prompt composition and the inference endpoint client.
//!
//! This module provides:
//! * [`LlmClient`] — async trait implemented by all LLM backends.
//! * [`OllamaClient`] — Ollama native `/api/generate` client.
//! * [`prompt::compose`] — per-language prompt composition.
//! * [`LlmError`] — error variants for LLM operations.

pub mod client;
pub mod prompt;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use client::{LlmClient, LlmError, OllamaClient};
