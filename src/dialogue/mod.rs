//! Dialogue driver — the input/response loop.
//!
//! [`DialogueDriver`] owns one turn cycle: read a line, compose a prompt,
//! query the LLM, normalize and classify the reply, print it immediately,
//! and dispatch speech as a detached background task.  Speech for turn *N*
//! may still be playing while turn *N+1* is being typed or answered; that
//! overlap is accepted, not corrected, and nothing joins or cancels the
//! playback task.  No state survives a turn except the read-only
//! [`Persona`].

use std::io::Write as _;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::lang::{classify, LanguageTag};
use crate::llm::{prompt, LlmClient};
use crate::persona::Persona;
use crate::speech::{normalize_for_speech, Speaker};

// ---------------------------------------------------------------------------
// DialogueState
// ---------------------------------------------------------------------------

/// States of the dialogue loop.
///
/// The state machine transitions are:
///
/// ```text
/// AwaitingInput ──non-blank line──▶ QueryingLlm
///                                   ──reply shown──▶ Speaking
///                                                    ──task spawned──▶ AwaitingInput
/// AwaitingInput ──blank line──▶ AwaitingInput
/// AwaitingInput ──exit / quit / end of input──▶ Stopped
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogueState {
    /// Waiting for the operator to type a line.
    AwaitingInput,

    /// A prompt has been sent to the LLM collaborator.
    QueryingLlm,

    /// The reply is on screen; synthesis is being dispatched.
    Speaking,

    /// Terminal: an exit keyword was read or input ended.
    Stopped,
}

impl DialogueState {
    /// A short label for trace logging.
    pub fn label(&self) -> &'static str {
        match self {
            DialogueState::AwaitingInput => "awaiting-input",
            DialogueState::QueryingLlm => "querying-llm",
            DialogueState::Speaking => "speaking",
            DialogueState::Stopped => "stopped",
        }
    }
}

impl Default for DialogueState {
    fn default() -> Self {
        DialogueState::AwaitingInput
    }
}

/// Log and apply a state transition.
fn advance(state: &mut DialogueState, next: DialogueState) {
    log::trace!("dialogue state: {} → {}", state.label(), next.label());
    *state = next;
}

// ---------------------------------------------------------------------------
// Utterance
// ---------------------------------------------------------------------------

/// One turn's reply flowing through the pipeline.
///
/// Turn-local: built after the LLM answers, discarded once playback has been
/// dispatched.
#[derive(Debug, Clone)]
pub struct Utterance {
    /// The reply as the LLM produced it (or the canned apology).
    pub raw_text: String,
    /// The speakable form: whitespace collapsed, code stripped, never empty.
    pub normalized_text: String,
    /// Language detected from the normalized text; drives voice selection.
    pub language: LanguageTag,
}

// ---------------------------------------------------------------------------
// Input classification
// ---------------------------------------------------------------------------

/// What one input line means to the loop.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    /// Whitespace-only line; stay in `AwaitingInput`.
    Blank,
    /// One of the reserved exit keywords.
    Exit,
    /// An utterance for the assistant.
    Say(String),
}

fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Input::Blank;
    }
    if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
        return Input::Exit;
    }
    Input::Say(trimmed.to_string())
}

// ---------------------------------------------------------------------------
// DialogueDriver
// ---------------------------------------------------------------------------

/// Orchestrates turns between the operator, the LLM and the speaker.
pub struct DialogueDriver {
    persona: Persona,
    llm: Arc<dyn LlmClient>,
    speaker: Arc<Speaker>,
}

impl DialogueDriver {
    pub fn new(persona: Persona, llm: Arc<dyn LlmClient>, speaker: Arc<Speaker>) -> Self {
        Self {
            persona,
            llm,
            speaker,
        }
    }

    /// Produce the turn's [`Utterance`] for one line of user text.
    ///
    /// A failed LLM call is recovered here: the canned apology (in the
    /// persona's register) takes the reply's place and the turn continues
    /// normally.  This method never fails.
    pub async fn respond(&self, user_text: &str) -> Utterance {
        let prompt = prompt::compose(user_text, &self.persona);

        let raw_text = match self.llm.ask(&prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                log::warn!("LLM query failed ({e}); substituting apology");
                let ending = self.persona.ending();
                format!("ขอโทษ{ending} ระบบ LLM มีปัญหานิดหน่อย{ending}")
            }
        };

        let normalized_text = normalize_for_speech(&raw_text, self.persona.ending());
        let language = classify(&normalized_text);

        Utterance {
            raw_text,
            normalized_text,
            language,
        }
    }

    /// Dispatch synthesis + playback for `utterance` as a detached task.
    ///
    /// Deliberately fire-and-forget: the handle is dropped, nothing joins
    /// it, and a task still playing at process exit is abandoned.  Failures
    /// inside the task are logged and the turn stays silent — the text is
    /// already on screen.
    fn dispatch_speech(&self, utterance: Utterance) {
        let speaker = Arc::clone(&self.speaker);
        tokio::spawn(async move {
            if let Err(e) = speaker
                .speak(&utterance.normalized_text, utterance.language)
                .await
            {
                log::warn!("speech output failed: {e}");
            }
        });
    }

    /// Run the interactive loop over stdin until an exit keyword or end of
    /// input.
    pub async fn run(&self) -> anyhow::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut state = DialogueState::AwaitingInput;

        while state != DialogueState::Stopped {
            print!("You: ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                advance(&mut state, DialogueState::Stopped);
                break;
            };

            match parse_input(&line) {
                Input::Blank => {}
                Input::Exit => advance(&mut state, DialogueState::Stopped),
                Input::Say(text) => {
                    advance(&mut state, DialogueState::QueryingLlm);
                    let utterance = self.respond(&text).await;

                    // Text first, audio whenever it arrives.
                    println!("AI: {}", utterance.raw_text);

                    advance(&mut state, DialogueState::Speaking);
                    self.dispatch_speech(utterance);
                    advance(&mut state, DialogueState::AwaitingInput);
                }
            }
        }

        log::info!("dialogue stopped");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlaybackConfig;
    use crate::llm::LlmError;
    use crate::persona::Gender;
    use crate::speech::{Player, TtsClient, TtsError};
    use async_trait::async_trait;

    // -----------------------------------------------------------------------
    // Test doubles
    // -----------------------------------------------------------------------

    /// Always answers with a fixed reply.
    struct AlwaysOk(String);

    #[async_trait]
    impl LlmClient for AlwaysOk {
        async fn ask(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok(self.0.clone())
        }
    }

    /// Always fails with a transport error.
    struct AlwaysFails;

    #[async_trait]
    impl LlmClient for AlwaysFails {
        async fn ask(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::Request("connection refused".into()))
        }
    }

    /// Synthesis double that returns silence.
    struct SilentTts;

    #[async_trait]
    impl TtsClient for SilentTts {
        async fn synthesize(&self, _: &str, _: &str, _: &str) -> Result<Vec<u8>, TtsError> {
            Ok(b"mp3".to_vec())
        }
    }

    fn driver_with(llm: Arc<dyn LlmClient>, gender: Gender) -> DialogueDriver {
        let persona = Persona::new(gender);
        let player = Player::from_config(&PlaybackConfig {
            command: "true".into(),
            args: vec![],
        });
        let speaker = Arc::new(Speaker::new(Arc::new(SilentTts), player, gender));
        DialogueDriver::new(persona, llm, speaker)
    }

    // -----------------------------------------------------------------------
    // parse_input
    // -----------------------------------------------------------------------

    #[test]
    fn blank_lines_are_blank() {
        assert_eq!(parse_input(""), Input::Blank);
        assert_eq!(parse_input("   "), Input::Blank);
        assert_eq!(parse_input("\t\n"), Input::Blank);
    }

    #[test]
    fn exit_keywords_stop_the_loop() {
        assert_eq!(parse_input("exit"), Input::Exit);
        assert_eq!(parse_input("quit"), Input::Exit);
        assert_eq!(parse_input("  EXIT  "), Input::Exit);
        assert_eq!(parse_input("Quit"), Input::Exit);
    }

    #[test]
    fn anything_else_is_an_utterance() {
        assert_eq!(parse_input("hello"), Input::Say("hello".into()));
        assert_eq!(parse_input("  exit now  "), Input::Say("exit now".into()));
        assert_eq!(parse_input("สวัสดี"), Input::Say("สวัสดี".into()));
    }

    // -----------------------------------------------------------------------
    // respond
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn successful_reply_flows_through_unchanged() {
        let driver = driver_with(Arc::new(AlwaysOk("สวัสดีครับ".into())), Gender::Male);
        let utterance = driver.respond("สวัสดี").await;

        assert_eq!(utterance.raw_text, "สวัสดีครับ");
        assert_eq!(utterance.normalized_text, "สวัสดีครับ");
        assert_eq!(utterance.language, LanguageTag::Th);
    }

    #[tokio::test]
    async fn multiline_reply_is_normalized_for_speech() {
        let driver = driver_with(Arc::new(AlwaysOk("  a\n\nb  ".into())), Gender::Male);
        let utterance = driver.respond("hi").await;

        assert_eq!(utterance.raw_text, "  a\n\nb  ");
        assert_eq!(utterance.normalized_text, "a b");
        assert_eq!(utterance.language, LanguageTag::En);
    }

    #[tokio::test]
    async fn llm_failure_substitutes_apology_in_persona_register() {
        let driver = driver_with(Arc::new(AlwaysFails), Gender::Female);
        let utterance = driver.respond("hello").await;

        assert!(utterance.raw_text.starts_with("ขอโทษค่ะ"));
        assert!(utterance.raw_text.ends_with("ค่ะ"));
        // The apology is Thai, so the Thai voice will speak it.
        assert_eq!(utterance.language, LanguageTag::Th);
    }

    #[tokio::test]
    async fn empty_reply_speaks_the_canned_fallback() {
        let driver = driver_with(Arc::new(AlwaysOk(String::new())), Gender::Male);
        let utterance = driver.respond("hello").await;

        assert!(utterance.raw_text.is_empty());
        assert!(utterance.normalized_text.starts_with("ขอโทษครับ"));
        assert_eq!(utterance.language, LanguageTag::Th);
    }

    #[tokio::test]
    async fn lao_reply_is_classified_as_lao() {
        let driver = driver_with(Arc::new(AlwaysOk("ສະບາຍດີ".into())), Gender::Male);
        let utterance = driver.respond("ສະບາຍດີ").await;

        assert_eq!(utterance.language, LanguageTag::Lo);
    }

    #[tokio::test]
    async fn dispatch_speech_does_not_block_the_turn() {
        let driver = driver_with(Arc::new(AlwaysOk("hello".into())), Gender::Male);
        let utterance = driver.respond("hi").await;
        // Fire-and-forget: returns immediately, nothing to await or join.
        driver.dispatch_speech(utterance);
    }

    // -----------------------------------------------------------------------
    // DialogueState
    // -----------------------------------------------------------------------

    #[test]
    fn default_state_awaits_input() {
        assert_eq!(DialogueState::default(), DialogueState::AwaitingInput);
    }

    #[test]
    fn state_labels() {
        assert_eq!(DialogueState::AwaitingInput.label(), "awaiting-input");
        assert_eq!(DialogueState::QueryingLlm.label(), "querying-llm");
        assert_eq!(DialogueState::Speaking.label(), "speaking");
        assert_eq!(DialogueState::Stopped.label(), "stopped");
    }

    #[test]
    fn advance_moves_the_state() {
        let mut state = DialogueState::AwaitingInput;
        advance(&mut state, DialogueState::QueryingLlm);
        assert_eq!(state, DialogueState::QueryingLlm);
    }
}
