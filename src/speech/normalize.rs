//! Reply normalisation for speech synthesis.
//!
//! LLM output is written for a screen, not a voice: it arrives with
//! paragraph breaks, fenced code blocks and stray formatting markers, none
//! of which are speakable.  [`normalize_for_speech`] flattens whitespace,
//! removes code fences and backticks, and substitutes a canned Thai apology
//! (ending in the persona's politeness particle) whenever there is nothing
//! left to say.

use std::sync::LazyLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

/// Matches a complete fenced code block.  Runs after whitespace collapsing,
/// so the lazy `.` never has to cross a newline.
static FENCED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```.*?```").expect("fence pattern"));

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Clean `reply` for the synthesis pipeline.
///
/// Steps, in order:
/// 1. Empty reply → canned apology ending in `ending`.
/// 2. Collapse every whitespace run to a single space and trim.
/// 3. Delete fenced ```` ``` ```` blocks outright and drop stray backticks.
/// 4. Re-collapse, and if the fences were all there was, fall back to the
///    apology — the result is always non-empty.
///
/// # Examples
///
/// ```
/// use voice_assistant::speech::normalize_for_speech;
///
/// assert_eq!(normalize_for_speech("  a\n\nb  ", "ครับ"), "a b");
/// assert!(normalize_for_speech("", "ค่ะ").ends_with("ค่ะ"));
/// ```
pub fn normalize_for_speech(reply: &str, ending: &str) -> String {
    if reply.is_empty() {
        return apology(ending);
    }

    let flat = WHITESPACE_RUN.replace_all(reply, " ");
    let flat = flat.trim();

    let without_fences = FENCED_BLOCK.replace_all(flat, " ");
    let without_ticks = without_fences.replace('`', "");

    let speakable = WHITESPACE_RUN
        .replace_all(&without_ticks, " ")
        .trim()
        .to_string();

    if speakable.is_empty() {
        apology(ending)
    } else {
        speakable
    }
}

/// Canned "can't answer right now" apology in the persona's register.
fn apology(ending: &str) -> String {
    format!("ขอโทษ{ending} ตอนนี้ตอบไม่ทัน ลองใหม่อีกครั้งนะ{ending}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
