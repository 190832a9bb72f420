//! Audio playback through an external player process.
//!
//! Synthesized audio is written to a temporary file and handed to a
//! command-line player (`mpg123 -q` by default).  The temp file lives until
//! the player exits; the `tempfile` guard removes it afterwards.  Playback
//! failure is never fatal to a turn — the text reply has already been shown
//! by the time audio is attempted.

use std::io::Write;

use thiserror::Error;
use tokio::process::Command;

use crate::config::PlaybackConfig;

// ---------------------------------------------------------------------------
// PlaybackError
// ---------------------------------------------------------------------------

/// Errors that can occur while playing synthesized audio.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Could not write the audio scratch file.
    #[error("cannot write audio file: {0}")]
    Io(#[from] std::io::Error),

    /// The player binary could not be spawned (missing, not executable).
    #[error("cannot spawn player `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    /// The player ran but exited unsuccessfully.
    #[error("player `{command}` exited with {status}")]
    PlayerFailed {
        command: String,
        status: std::process::ExitStatus,
    },
}

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// Plays audio bytes through the configured external player.
#[derive(Debug, Clone)]
pub struct Player {
    command: String,
    args: Vec<String>,
}

impl Player {
    /// Build a player from application config.
    pub fn from_config(config: &PlaybackConfig) -> Self {
        Self {
            command: config.command.clone(),
            args: config.args.clone(),
        }
    }

    /// Write `audio` to a scratch file and play it, waiting for the player
    /// to finish.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError`] when the scratch file cannot be written,
    /// the player cannot be spawned, or it exits unsuccessfully.  Callers
    /// treat all three as a silent (logged) turn.
    pub async fn play(&self, audio: &[u8]) -> Result<(), PlaybackError> {
        let mut file = tempfile::Builder::new()
            .prefix("assistant-reply-")
            .suffix(".mp3")
            .tempfile()?;
        file.write_all(audio)?;
        file.flush()?;

        let status = Command::new(&self.command)
            .args(&self.args)
            .arg(file.path())
            .status()
            .await
            .map_err(|source| PlaybackError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        if !status.success() {
            return Err(PlaybackError::PlayerFailed {
                command: self.command.clone(),
                status,
            });
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn player(command: &str, args: &[&str]) -> Player {
        Player {
            command: command.into(),
            args: args.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn missing_binary_reports_spawn_error() {
        let player = player("definitely-not-a-player-binary", &[]);
        let err = player.play(b"mp3bytes").await.unwrap_err();
        assert!(matches!(err, PlaybackError::Spawn { .. }));
    }

    #[tokio::test]
    async fn failing_player_reports_exit_status() {
        // `false` ignores its argument and exits 1 — a stand-in for a
        // player that rejects the file.
        let player = player("false", &[]);
        let err = player.play(b"mp3bytes").await.unwrap_err();
        assert!(matches!(err, PlaybackError::PlayerFailed { .. }));
    }

    #[tokio::test]
    async fn succeeding_player_returns_ok() {
        // `true` exits 0 regardless of the file path appended.
        let player = player("true", &[]);
        assert!(player.play(b"mp3bytes").await.is_ok());
    }

    #[test]
    fn from_config_copies_command_and_args() {
        let config = PlaybackConfig::default();
        let player = Player::from_config(&config);
        assert_eq!(player.command, config.command);
        assert_eq!(player.args, config.args);
    }
}
