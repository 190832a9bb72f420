//! Prompt composition for the dialogue LLM.
//!
//! [`compose`] detects the language of the user's utterance and builds a
//! flat prompt (for Ollama `/api/generate`) out of four pieces: the fixed
//! Thai system preamble, a per-language response instruction, a politeness
//! ending hint, and the user text.  Instruction and ending tables are
//! exhaustive over [`LanguageTag`], so every detectable language gets a
//! defined entry and the English row doubles as the explicit fallback.

use crate::lang::{classify, LanguageTag};
use crate::persona::{Gender, Persona};

// ---------------------------------------------------------------------------
// Static tables
// ---------------------------------------------------------------------------

/// Response-language instruction shown to the model, per detected language.
fn instruction(tag: LanguageTag) -> &'static str {
    match tag {
        LanguageTag::Th => {
            "ตอบเป็นภาษาไทยธรรมชาติ เหมือนคนไทยจริงๆ ใช้การเว้นวรรคและวรรคตอนที่ถูกต้อง"
        }
        LanguageTag::Lo => "ຕອບເປັນພາສາລາວທຳມະຊາດ ເໝືອນຄົນລາວຈິງ",
        LanguageTag::Zh => "用自然中文回答，像母语者一样，注意标点符号和空格",
        LanguageTag::Ja => "自然な日本語で回答してください。句読点とスペースを正しく使ってください",
        LanguageTag::Ko => "자연스러운 한국어로 답변해주세요. 띄어쓰기와 문장부호를 정확하게 사용해주세요",
        LanguageTag::Es => {
            "Responde en español natural como un hablante nativo, usando espacios y puntuación correctos"
        }
        LanguageTag::Fr => {
            "Réponds en français naturel comme un locuteur natif, avec des espaces et ponctuation corrects"
        }
        LanguageTag::De => {
            "Antworte auf natürliches Deutsch wie ein Muttersprachler, mit korrekten Abständen und Zeichensetzung"
        }
        LanguageTag::En => {
            "Respond in natural English like a native speaker, with proper spacing and punctuation"
        }
    }
}

/// Sentence-ending hint, per detected language and persona gender.
///
/// Only Thai actually varies by gender; the other languages keep a single
/// particle or plain punctuation.
fn ending(tag: LanguageTag, gender: Gender) -> &'static str {
    match tag {
        LanguageTag::Th => match gender {
            Gender::Male => "ครับ",
            Gender::Female => "ค่ะ",
        },
        LanguageTag::Lo => "ຄ່າ",
        LanguageTag::Zh => "。",
        LanguageTag::Ja => "です",
        LanguageTag::Ko => "입니다",
        LanguageTag::Es | LanguageTag::Fr | LanguageTag::De | LanguageTag::En => ".",
    }
}

// ---------------------------------------------------------------------------
// compose
// ---------------------------------------------------------------------------

/// Build the full prompt for one user utterance.
///
/// The preamble pins the assistant's role (multilingual smart-home
/// assistant) in Thai regardless of the detected language; the instruction
/// then steers the response language to match the user's.
pub fn compose(user_text: &str, persona: &Persona) -> String {
    let user_lang = classify(user_text);
    let instruction = instruction(user_lang);
    let ending = ending(user_lang, persona.gender());

    format!(
        "คุณเป็นผู้ช่วย AI ระดับสูง ควบคุมระบบ smart home พูดภาษาต่างๆ ได้เป็นอย่างดี \
         {instruction} ตอบตรงๆ สั้นกระชับ แต่ให้ข้อมูลครบถ้วน \
         ใช้คำลงท้าย {ending} \
         ผู้ใช้: {user_text}\nผู้ช่วย:"
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
