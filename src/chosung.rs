//! Initial-consonant (chosung) extraction for Hangul text.
//!
//! Every precomposed Hangul syllable (U+AC00..=U+D7A3) is built as
//! `base + (lead * 21 + vowel) * 28 + tail`, so the leading consonant index
//! falls out of a single division. The index is mapped to the compatibility
//! jamo users actually type (ㄱ, ㄴ, ...), which is what book-name
//! abbreviations such as `ㅊㅅㄱ` are written with.

/// First precomposed Hangul syllable (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// Last precomposed Hangul syllable (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// Medial vowel count
const JUNGSEONG_COUNT: u32 = 21;
/// Trailing consonant count, including "no trailing consonant"
const JONGSEONG_COUNT: u32 = 28;

/// Leading consonants in Unicode syllable order.
pub const CHOSUNG: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

/// Leading consonant of a single syllable, or `None` for anything that is
/// not a precomposed Hangul syllable.
pub fn chosung_of(c: char) -> Option<char> {
    let code = c as u32;
    if !(HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&code) {
        return None;
    }
    let index = (code - HANGUL_SYLLABLE_BASE) / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    CHOSUNG.get(index as usize).copied()
}

/// Replace every Hangul syllable with its leading consonant.
///
/// Characters outside the syllable block (digits, Latin, spaces, bare jamo)
/// are copied through unchanged.
///
/// ```
/// use versegrep::get_chosung;
///
/// assert_eq!(get_chosung("창세기"), "ㅊㅅㄱ");
/// assert_eq!(get_chosung("창 1장"), "ㅊ 1ㅈ");
/// ```
pub fn get_chosung(text: &str) -> String {
    text.chars().map(|c| chosung_of(c).unwrap_or(c)).collect()
}

/// True when `text` is non-empty and made only of leading-consonant jamo.
pub fn is_chosung(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| CHOSUNG.contains(&c))
}
