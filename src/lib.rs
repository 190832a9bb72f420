//! Multilingual voice assistant — library crate.
//!
//! A read-line dialogue loop over a local LLM with spoken replies:
//!
//! 1. [`llm::prompt`] composes a per-language prompt for the user's line.
//! 2. [`llm::OllamaClient`] queries the inference endpoint.
//! 3. [`speech::normalize_for_speech`] cleans the reply for synthesis.
//! 4. [`lang::classify`] detects the reply's script;
//!    [`speech::voice`] resolves the matching voice and rate;
//!    [`lang::transliterate_lao_to_thai`] rewrites Lao into Thai script
//!    (no Lao voice exists).
//! 5. [`speech::Speaker`] synthesizes and plays the audio in a detached
//!    background task while the loop returns to the prompt.
//!
//! The binary in `main.rs` wires these together from [`config::AppConfig`]
//! and a [`persona::Persona`] chosen once at startup.

pub mod config;
pub mod dialogue;
pub mod lang;
pub mod llm;
pub mod persona;
pub mod speech;
