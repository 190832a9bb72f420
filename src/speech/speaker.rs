//! Per-turn synthesis pipeline: voice resolution → transliteration →
//! synthesis → playback.
//!
//! One [`Speaker`] is built at startup and shared (`Arc`) by the detached
//! per-turn tasks the dialogue driver spawns.  A speak call owns everything
//! it needs for its turn; nothing is retained between turns.

use std::sync::Arc;

use thiserror::Error;

use crate::lang::{transliterate_lao_to_thai, LanguageTag};
use crate::persona::Gender;
use crate::speech::playback::{PlaybackError, Player};
use crate::speech::tts::{TtsClient, TtsError};
use crate::speech::voice;

// ---------------------------------------------------------------------------
// SpeechError
// ---------------------------------------------------------------------------

/// Errors from the synthesis half of a turn.  All of them are logged and
/// swallowed by the caller — the text reply is already on screen.
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error(transparent)]
    Tts(#[from] TtsError),

    #[error(transparent)]
    Playback(#[from] PlaybackError),
}

// ---------------------------------------------------------------------------
// Speaker
// ---------------------------------------------------------------------------

/// Turns reply text into audible speech.
pub struct Speaker {
    tts: Arc<dyn TtsClient>,
    player: Player,
    gender: Gender,
}

impl Speaker {
    pub fn new(tts: Arc<dyn TtsClient>, player: Player, gender: Gender) -> Self {
        Self {
            tts,
            player,
            gender,
        }
    }

    /// Synthesize and play `text`, already classified as `language`.
    ///
    /// Lao text is transliterated into Thai script and forced onto the Thai
    /// voice/rate, overriding whatever the resolver returned for `lo` —
    /// the backend has no Lao model.
    ///
    /// # Errors
    ///
    /// Returns [`SpeechError`] on synthesis or playback failure; the caller
    /// logs it and the turn completes silently.
    pub async fn speak(&self, text: &str, language: LanguageTag) -> Result<(), SpeechError> {
        let (mut voice_id, mut rate) = voice::resolve(language, self.gender);

        let spoken;
        let text = if language == LanguageTag::Lo {
            spoken = transliterate_lao_to_thai(text);
            (voice_id, rate) = voice::resolve(LanguageTag::Th, self.gender);
            log::info!("lo → th transliteration: {spoken}");
            spoken.as_str()
        } else {
            text
        };

        let audio = self.tts.synthesize(text, voice_id, rate).await?;
        self.player.play(&audio).await?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    // -----------------------------------------------------------------------
    // Test doubles
    // -----------------------------------------------------------------------

    /// Records the synthesis request and returns fixed bytes.
    #[derive(Default)]
    struct RecordingTts {
        calls: Mutex<Vec<(String, String, String)>>,
    }

    #[async_trait]
    impl TtsClient for RecordingTts {
        async fn synthesize(
            &self,
            text: &str,
            voice: &str,
            rate: &str,
        ) -> Result<Vec<u8>, TtsError> {
            self.calls
                .lock()
                .unwrap()
                .push((text.into(), voice.into(), rate.into()));
            Ok(b"mp3".to_vec())
        }
    }

    /// Always fails synthesis.
    struct BrokenTts;

    #[async_trait]
    impl TtsClient for BrokenTts {
        async fn synthesize(&self, _: &str, _: &str, _: &str) -> Result<Vec<u8>, TtsError> {
            Err(TtsError::Request("connection refused".into()))
        }
    }

    fn null_player() -> Player {
        // `true` accepts any argument and exits 0.
        Player::from_config(&crate::config::PlaybackConfig {
            command: "true".into(),
            args: vec![],
        })
    }

    fn speaker_with(tts: Arc<dyn TtsClient>, gender: Gender) -> Speaker {
        Speaker::new(tts, null_player(), gender)
    }

    // -----------------------------------------------------------------------
    // Tests
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn thai_reply_uses_thai_voice_without_transliteration() {
        let tts = Arc::new(RecordingTts::default());
        let speaker = speaker_with(Arc::clone(&tts) as Arc<dyn TtsClient>, Gender::Female);

        speaker.speak("สวัสดี", LanguageTag::Th).await.unwrap();

        let calls = tts.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (text, voice, rate) = &calls[0];
        assert_eq!(text, "สวัสดี");
        assert_eq!(voice, "th-TH-PremwadeeNeural");
        assert_eq!(rate, "-15%");
    }

    #[tokio::test]
    async fn lao_reply_is_transliterated_and_forced_onto_thai_voice() {
        let tts = Arc::new(RecordingTts::default());
        let speaker = speaker_with(Arc::clone(&tts) as Arc<dyn TtsClient>, Gender::Male);

        speaker.speak("ສະບາຍດີ hello", LanguageTag::Lo).await.unwrap();

        let calls = tts.calls.lock().unwrap();
        let (text, voice, rate) = &calls[0];
        assert_eq!(text, "สะบาญดี hello");
        assert_eq!(voice, "th-TH-NiwatNeural");
        assert_eq!(rate, "-15%");
    }

    #[tokio::test]
    async fn english_reply_runs_at_natural_rate() {
        let tts = Arc::new(RecordingTts::default());
        let speaker = speaker_with(Arc::clone(&tts) as Arc<dyn TtsClient>, Gender::Male);

        speaker.speak("hello there", LanguageTag::En).await.unwrap();

        let calls = tts.calls.lock().unwrap();
        let (_, voice, rate) = &calls[0];
        assert_eq!(voice, "en-US-GuyNeural");
        assert_eq!(rate, "+0%");
    }

    #[tokio::test]
    async fn synthesis_failure_surfaces_as_tts_error() {
        let speaker = speaker_with(Arc::new(BrokenTts), Gender::Male);
        let err = speaker.speak("hi", LanguageTag::En).await.unwrap_err();
        assert!(matches!(err, SpeechError::Tts(_)));
    }

    #[tokio::test]
    async fn playback_failure_surfaces_as_playback_error() {
        let speaker = Speaker::new(
            Arc::new(RecordingTts::default()),
            Player::from_config(&crate::config::PlaybackConfig {
                command: "false".into(),
                args: vec![],
            }),
            Gender::Male,
        );
        let err = speaker.speak("hi", LanguageTag::En).await.unwrap_err();
        assert!(matches!(err, SpeechError::Playback(_)));
    }
}
