//! Assistant persona — gender, politeness particle, default voice.
//!
//! The persona is chosen **once** at process start and never mutated: the
//! `ASSISTANT_PERSONA` environment variable forces `male` or `female`, and
//! anything else (including the variable being unset) resolves to a coin
//! flip.  Everything derived from the persona — the Thai politeness particle
//! and the default Thai voice — is a pure function of the gender, so the
//! struct stores only that and hands out `&'static str` views.

use crate::lang::LanguageTag;
use crate::speech::voice;

// ---------------------------------------------------------------------------
// Gender
// ---------------------------------------------------------------------------

/// Persona gender, which selects the voice and the Thai politeness particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse an override string (`"male"` / `"female"`, any case, padded
    /// whitespace tolerated).  Returns `None` for anything else so the
    /// caller can fall back to a random choice.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }

    /// Lowercase label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

// ---------------------------------------------------------------------------
// Persona
// ---------------------------------------------------------------------------

/// Environment variable consulted for the persona override.
pub const PERSONA_ENV: &str = "ASSISTANT_PERSONA";

/// The fixed identity the assistant adopts for the whole session.
///
/// Constructed once in `main` and passed by reference into the prompt
/// composer and the speaker; components never reach for a hidden global.
#[derive(Debug, Clone, Copy)]
pub struct Persona {
    gender: Gender,
}

impl Persona {
    /// Create a persona with an explicit gender (used by tests and by
    /// [`Persona::from_env`]).
    pub fn new(gender: Gender) -> Self {
        Self { gender }
    }

    /// Resolve the persona from [`PERSONA_ENV`], falling back to a random
    /// gender when the variable is unset or unrecognised.
    pub fn from_env() -> Self {
        let gender = std::env::var(PERSONA_ENV)
            .ok()
            .and_then(|v| Gender::parse(&v))
            .unwrap_or_else(|| {
                if rand::random::<bool>() {
                    Gender::Male
                } else {
                    Gender::Female
                }
            });
        Self::new(gender)
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Thai sentence-final politeness particle (ครับ for male, ค่ะ for
    /// female).  Used in canned apologies and prompt ending hints.
    pub fn ending(&self) -> &'static str {
        match self.gender {
            Gender::Male => "ครับ",
            Gender::Female => "ค่ะ",
        }
    }

    /// The default (Thai) synthesis voice for this persona.
    pub fn default_voice(&self) -> &'static str {
        voice::resolve(LanguageTag::Th, self.gender).0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
