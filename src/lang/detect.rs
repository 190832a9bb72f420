//! Character-set script detection.
//!
//! [`classify`] maps arbitrary text to a [`LanguageTag`] by intersecting the
//! text's unique code points with five fixed per-script alphabets.  Scripts
//! are tested in the fixed priority order **Lao > Thai > Chinese > Japanese >
//! Korean**; the first script with a non-empty intersection wins, and text
//! matching none of them falls back to [`LanguageTag::En`].
//!
//! The ordering matters: Lao and Thai sit in adjacent Unicode blocks and the
//! system is Thai-first by origin, so Lao must be tested before Thai; the
//! Han-derived scripts come after the Southeast-Asian ones.  Mixed-script
//! text therefore resolves by priority, not by dominant character count —
//! short Japanese text whose kana intersection is empty classifies as `zh`
//! through its kanji.  That is inherited, documented behaviour; downstream
//! voice selection depends on it.

use super::LanguageTag;
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Script alphabets
// ---------------------------------------------------------------------------

/// Thai consonants, symbols and digits.
///
/// Deliberately excludes the vowel signs and tone marks (U+0E30–U+0E4E):
/// those are combining characters that never occur without a consonant, so
/// the consonant set alone is enough to witness Thai text.
const THAI_CHARS: &str = "กขฃคฅฆงจฉชซฌญฎฏฐฑฒณดตถทธนบปผฝพฟภมยรลวศษสหฬอฮฯๆ๏๐๑๒๓๔๕๖๗๘๙๚๛";

/// Lao consonants, symbols and digits (same exclusion of vowel signs).
const LAO_CHARS: &str = "ກຂຄງຈຊຍດຕຖທນບປຜຝພຟຠມຢຣລວສຫອຮຯໆ໐໑໒໓໔໕໖໗໘໙໚໛";

/// High-frequency Han characters.  Not exhaustive — a frequency list large
/// enough that any realistic Chinese sentence contains at least one member.
const CHINESE_CHARS: &str = "的一是在不了有和人这中大为上个国我以要他时来用们生到作地于出就分对成会可主发年动同工也能下过子说产种面而方后多定行学法所民得经十三之进着等部度家电力里如水化高自二理起小物现实加量都两体制机当使点从业本去把性好应开它合还因由其些然前外天政四日那社义事平形相全表间样与关各重新线内数正心反你明看原又么利比或但质气第向道命此变条只没结解问意建月公无系军很情者最立代想已通并提直题党程展五果料象员革位入常文总次品式活设及管特件长求老头基资边流路级少图山统接知较将组见计别她手角期根论运农指几九区强放决西被干做必战先回则任取据处队南给色光门即保治北造百规热领七海口东导器压志世金增争济阶油思术极交受联什认六共权收证改清己美再采转更单风切打白教速花带安场身车例真务具万每目至达走积示议声报斗完类八离华名确才科张信马节话米整空元况今集温传土许步群广石记需段研界拉林律叫且究观越织装影算低持音众书布复容儿须际商非验连断深难近矿千周委素技备半办青省列习响约支般史感劳便团往酸历市克何除消构府称太准精值号率族维划选标写存候毛亲快效斯院查江型眼王按格养易置派层片始却专状育厂京识适属圆包火住调满县局照参红细引听该铁价严龙飞";

/// Hiragana and katakana.  Kanji are intentionally absent — they are covered
/// by the Chinese set, which is tested first (see module docs).
const JAPANESE_CHARS: &str = "あいうえおかきくけこさしすせそたちつてとなにぬねのはひふへほまみむめもやゆよらりるれろわをんアイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワヲン";

/// Common hangul syllables.
const KOREAN_CHARS: &str = "가나다라마바사아자차카타파하거너더러머버서어저커타퍼허기니디리미비시이지치키티피히구누두루무부수우주추쿠투푸후그느드르므브스으즈츠크트프호교료무보소오조초코포호";

// ---------------------------------------------------------------------------
// classify
// ---------------------------------------------------------------------------

/// Detect the language of `text` from its script.
///
/// O(len(text)) to collect the unique code points, then O(1) per script test
/// over the small fixed alphabets.  Empty input matches nothing and returns
/// [`LanguageTag::En`].
///
/// # Examples
///
/// ```
/// use voice_assistant::lang::{classify, LanguageTag};
///
/// assert_eq!(classify("สวัสดี"), LanguageTag::Th);
/// assert_eq!(classify("ສະບາຍດີ"), LanguageTag::Lo);
/// assert_eq!(classify("hello"), LanguageTag::En);
/// ```
pub fn classify(text: &str) -> LanguageTag {
    let seen: HashSet<char> = text.chars().collect();
    let intersects = |alphabet: &str| alphabet.chars().any(|c| seen.contains(&c));

    // Priority order: Lao > Thai > Chinese > Japanese > Korean.
    if intersects(LAO_CHARS) {
        LanguageTag::Lo
    } else if intersects(THAI_CHARS) {
        LanguageTag::Th
    } else if intersects(CHINESE_CHARS) {
        LanguageTag::Zh
    } else if intersects(JAPANESE_CHARS) {
        LanguageTag::Ja
    } else if intersects(KOREAN_CHARS) {
        LanguageTag::Ko
    } else {
        LanguageTag::En
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- Fallback ----------------------------------------------------------

    #[test]
    fn empty_string_is_english() {
        assert_eq!(classify(""), LanguageTag::En);
    }

    #[test]
    fn latin_only_is_english() {
        assert_eq!(classify("hello world, it's 9:41!"), LanguageTag::En);
    }

    #[test]
    fn digits_and_punctuation_are_english() {
        assert_eq!(classify("12345 --- ???"), LanguageTag::En);
    }

    #[test]
    fn accented_latin_is_english() {
        // Spanish/French/German share the Latin fallback — the classifier
        // has no accent heuristics.
        assert_eq!(classify("¿Cómo estás?"), LanguageTag::En);
        assert_eq!(classify("Grüß dich"), LanguageTag::En);
    }

    // --- Single scripts ----------------------------------------------------

    #[test]
    fn thai_greeting_is_thai() {
        assert_eq!(classify("สวัสดี"), LanguageTag::Th);
    }

    #[test]
    fn single_thai_consonant_is_thai() {
        assert_eq!(classify("ก"), LanguageTag::Th);
    }

    #[test]
    fn lao_greeting_is_lao() {
        assert_eq!(classify("ສະບາຍດີ"), LanguageTag::Lo);
    }

    #[test]
    fn chinese_is_chinese() {
        assert_eq!(classify("你好，我是助手"), LanguageTag::Zh);
    }

    #[test]
    fn kana_is_japanese() {
        assert_eq!(classify("こんにちは"), LanguageTag::Ja);
    }

    #[test]
    fn hangul_is_korean() {
        assert_eq!(classify("가나다"), LanguageTag::Ko);
    }

    // --- Priority order ----------------------------------------------------

    #[test]
    fn lao_wins_over_thai() {
        // Both scripts present: Lao is tested first.
        assert_eq!(classify("ສະບາຍດີ สวัสดี"), LanguageTag::Lo);
    }

    #[test]
    fn lao_wins_over_latin() {
        assert_eq!(classify("ສະບາຍດີ hello"), LanguageTag::Lo);
    }

    #[test]
    fn lao_wins_over_every_other_script() {
        assert_eq!(classify("ກ สวัสดี 你好 こんにちは 가나다 hi"), LanguageTag::Lo);
    }

    #[test]
    fn thai_wins_over_latin() {
        assert_eq!(classify("สวัสดี hello"), LanguageTag::Th);
    }

    #[test]
    fn thai_without_lao_is_thai() {
        assert_eq!(classify("ขอบคุณมาก 123 ok"), LanguageTag::Th);
    }

    #[test]
    fn kanji_only_japanese_classifies_as_chinese() {
        // A short Japanese string with no kana falls into the Han set,
        // which is tested first.
        assert_eq!(classify("東京"), LanguageTag::Zh);
    }

    #[test]
    fn kana_with_frequent_kanji_classifies_as_chinese() {
        // Chinese is tested before Japanese, so a frequent kanji (的)
        // outranks the kana suffix.
        assert_eq!(classify("的です"), LanguageTag::Zh);
    }

    #[test]
    fn kana_without_frequent_kanji_is_japanese() {
        assert_eq!(classify("ありがとう"), LanguageTag::Ja);
    }
}
