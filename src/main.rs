//! Application entry point — multilingual voice assistant.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Resolve the [`Persona`] (environment override or coin flip).
//! 4. Build the LLM client, the TTS client and the audio player.
//! 5. Run the dialogue loop until `exit`/`quit` or end of input.
//!
//! Speech for each turn runs as a detached background task; a task still
//! playing when the loop ends is abandoned with the process.

use std::sync::Arc;

use voice_assistant::{
    config::AppConfig,
    dialogue::DialogueDriver,
    llm::{LlmClient, OllamaClient},
    persona::Persona,
    speech::{HttpTtsClient, Player, Speaker, TtsClient},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("voice assistant starting up");

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    // 3. Persona — fixed for the whole session
    let persona = Persona::from_env();
    log::info!(
        "Persona: {} / ending: {} / voice: {}",
        persona.gender().label(),
        persona.ending(),
        persona.default_voice()
    );

    // 4. Collaborators
    let llm: Arc<dyn LlmClient> = Arc::new(OllamaClient::from_config(&config.llm));
    let tts: Arc<dyn TtsClient> = Arc::new(HttpTtsClient::from_config(&config.tts));
    let player = Player::from_config(&config.playback);
    let speaker = Arc::new(Speaker::new(tts, player, persona.gender()));

    // 5. Dialogue loop — blocks until the operator leaves
    let driver = DialogueDriver::new(persona, llm, speaker);
    driver.run().await
}
