//! Static voice table and voice/rate resolution.
//!
//! One [`VoiceProfile`] per [`LanguageTag`], resolved through an exhaustive
//! `match` — there is no failure path, because the table is total over the
//! closed tag set by construction.  The Lao row aliases the Thai voices: the
//! synthesis backend ships no Lao model, and Lao replies are transliterated
//! into Thai script before synthesis (see [`crate::lang::transliterate`]).

use crate::lang::LanguageTag;
use crate::persona::Gender;

// ---------------------------------------------------------------------------
// VoiceProfile
// ---------------------------------------------------------------------------

/// Synthesis voices and rate adjustment for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceProfile {
    /// Voice identifier used for the male persona.
    pub male: &'static str,
    /// Voice identifier used for the female persona.
    pub female: &'static str,
    /// Speech-rate adjustment relative to natural rate (e.g. `"-15%"`).
    pub rate: &'static str,
}

impl VoiceProfile {
    /// Select the voice identifier for `gender`.
    pub fn voice_for(&self, gender: Gender) -> &'static str {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
        }
    }
}

// ---------------------------------------------------------------------------
// Static table
// ---------------------------------------------------------------------------

const TH: VoiceProfile = VoiceProfile {
    male: "th-TH-NiwatNeural",
    female: "th-TH-PremwadeeNeural",
    // Thai synthesis sounds rushed at natural rate; slow it down.
    rate: "-15%",
};

const EN: VoiceProfile = VoiceProfile {
    male: "en-US-GuyNeural",
    female: "en-US-JennyNeural",
    rate: "+0%",
};

const ZH: VoiceProfile = VoiceProfile {
    male: "zh-CN-YunxiNeural",
    female: "zh-CN-XiaoxiaoNeural",
    rate: "+0%",
};

const JA: VoiceProfile = VoiceProfile {
    male: "ja-JP-KeitaNeural",
    female: "ja-JP-NanamiNeural",
    rate: "+0%",
};

const KO: VoiceProfile = VoiceProfile {
    male: "ko-KR-HyunjunNeural",
    female: "ko-KR-SunHiNeural",
    rate: "+0%",
};

const ES: VoiceProfile = VoiceProfile {
    male: "es-ES-AlvaroNeural",
    female: "es-ES-ElviraNeural",
    rate: "+0%",
};

const FR: VoiceProfile = VoiceProfile {
    male: "fr-FR-HenriNeural",
    female: "fr-FR-DeniseNeural",
    rate: "+0%",
};

const DE: VoiceProfile = VoiceProfile {
    male: "de-DE-ConradNeural",
    female: "de-DE-KatjaNeural",
    rate: "+0%",
};

/// Look up the [`VoiceProfile`] for `tag`.
///
/// Lao has no native voice and reuses the Thai profile.
pub fn profile(tag: LanguageTag) -> &'static VoiceProfile {
    match tag {
        LanguageTag::Th | LanguageTag::Lo => &TH,
        LanguageTag::Zh => &ZH,
        LanguageTag::Ja => &JA,
        LanguageTag::Ko => &KO,
        LanguageTag::Es => &ES,
        LanguageTag::Fr => &FR,
        LanguageTag::De => &DE,
        LanguageTag::En => &EN,
    }
}

// ---------------------------------------------------------------------------
// resolve
// ---------------------------------------------------------------------------

/// Resolve `(voice_id, rate)` for a language/gender pair.
///
/// Total over every tag the classifier can emit crossed with both genders.
///
/// # Examples
///
/// ```
/// use voice_assistant::lang::LanguageTag;
/// use voice_assistant::persona::Gender;
/// use voice_assistant::speech::voice::resolve;
///
/// assert_eq!(
///     resolve(LanguageTag::Th, Gender::Female),
///     ("th-TH-PremwadeeNeural", "-15%")
/// );
/// ```
pub fn resolve(tag: LanguageTag, gender: Gender) -> (&'static str, &'static str) {
    let profile = profile(tag);
    (profile.voice_for(gender), profile.rate)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
