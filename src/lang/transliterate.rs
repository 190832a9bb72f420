//! Lao→Thai transliteration for speech synthesis.
//!
//! The synthesis backend has no Lao voice.  Thai is the nearest substitute —
//! the two scripts share their historical derivation and most consonants map
//! one-to-one — so Lao replies are rewritten into Thai script and spoken
//! through the Thai voice.
//!
//! The mapping is a fixed code-point substitution: consonants, vowel signs,
//! tone marks, digits and the repetition/ellipsis symbols.  Characters
//! outside the table (spaces, Latin letters, punctuation) pass through
//! unchanged, so the function is total over any input.

// ---------------------------------------------------------------------------
// Substitution table
// ---------------------------------------------------------------------------

/// Map a single Lao code point to its Thai equivalent.
///
/// Returns `None` for any character outside the table.
fn lao_to_thai(c: char) -> Option<char> {
    let mapped = match c {
        // Consonants
        'ກ' => 'ก',
        'ຂ' => 'ค',
        'ຄ' => 'ค',
        'ງ' => 'ง',
        'ຈ' => 'จ',
        'ຊ' => 'ช',
        'ຍ' => 'ญ',
        'ດ' => 'ด',
        'ຕ' => 'ต',
        'ຖ' => 'ถ',
        'ທ' => 'ท',
        'ນ' => 'น',
        'ບ' => 'บ',
        'ປ' => 'ป',
        'ຜ' => 'ผ',
        'ຝ' => 'ฝ',
        'ພ' => 'พ',
        'ຟ' => 'ฟ',
        'ມ' => 'ม',
        'ຢ' => 'ย',
        'ຣ' => 'ร',
        'ລ' => 'ล',
        'ວ' => 'ว',
        'ສ' => 'ส',
        'ຫ' => 'ห',
        'ອ' => 'อ',
        'ຮ' => 'ฮ',

        // Symbols
        'ຯ' => 'ฯ',
        'ໆ' => 'ๆ',

        // Digits
        '໐' => '๐',
        '໑' => '๑',
        '໒' => '๒',
        '໓' => '๓',
        '໔' => '๔',
        '໕' => '๕',
        '໖' => '๖',
        '໗' => '๗',
        '໘' => '๘',
        '໙' => '๙',
        '໚' => '๚',
        '໛' => '๛',

        // Vowel signs (combining marks; written as escapes for legibility)
        '\u{0EB0}' => '\u{0E30}', // ະ → ะ
        '\u{0EB1}' => '\u{0E31}', // ັ → ั
        '\u{0EB2}' => '\u{0E32}', // າ → า
        '\u{0EB3}' => '\u{0E33}', // ຳ → ำ
        '\u{0EB4}' => '\u{0E34}', // ິ → ิ
        '\u{0EB5}' => '\u{0E35}', // ີ → ี
        '\u{0EB6}' => '\u{0E36}', // ຶ → ึ
        '\u{0EB7}' => '\u{0E37}', // ື → ื
        '\u{0EB8}' => '\u{0E38}', // ຸ → ุ
        '\u{0EB9}' => '\u{0E39}', // ູ → ู
        '\u{0EBB}' => '\u{0E4B}', // ົ → ๋
        '\u{0EBC}' => '\u{0E4A}', // ຼ → ๊

        // Tone marks and nikkhahit
        '\u{0ECD}' => '\u{0E47}', // ໍ → ็
        '\u{0EC8}' => '\u{0E48}', // ່ → ่
        '\u{0EC9}' => '\u{0E49}', // ້ → ้
        '\u{0ECA}' => '\u{0E4A}', // ໊ → ๊
        '\u{0ECB}' => '\u{0E4B}', // ໋ → ๋

        _ => return None,
    };
    Some(mapped)
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Rewrite every mapped Lao character in `text` to its Thai equivalent.
///
/// Characters outside the table pass through unchanged, which makes the
/// function the identity on Lao-free input and idempotent in general (the
/// output contains no Lao characters left to map).
///
/// # Examples
///
/// ```
/// use voice_assistant::lang::transliterate_lao_to_thai;
///
/// assert_eq!(transliterate_lao_to_thai("ກ"), "ก");
/// assert_eq!(transliterate_lao_to_thai("hello"), "hello");
/// ```
pub fn transliterate_lao_to_thai(text: &str) -> String {
    text.chars()
        .map(|c| lao_to_thai(c).unwrap_or(c))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
