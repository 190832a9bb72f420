//! Speech output: voice selection, reply normalisation, synthesis, playback.
//!
//! This module provides:
//! * [`voice`] — static per-language voice table and `(voice, rate)` resolution.
//! * [`normalize_for_speech`] — cleans LLM output for synthesis.
//! * [`TtsClient`] / [`HttpTtsClient`] — the synthesis collaborator.
//! * [`Player`] — external playback process.
//! * [`Speaker`] — the per-turn pipeline gluing the above together.

pub mod normalize;
pub mod playback;
pub mod speaker;
pub mod tts;
pub mod voice;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use normalize::normalize_for_speech;
pub use playback::{PlaybackError, Player};
pub use speaker::{Speaker, SpeechError};
pub use tts::{HttpTtsClient, TtsClient, TtsError};
pub use voice::VoiceProfile;
