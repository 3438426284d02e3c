//! Script detection for routing names into their English or Japanese slot.

/// Returns `true` when every character is printable ASCII (0x20–0x7E),
/// a tab, a line feed or a carriage return.
///
/// The empty string is not considered English-only.
///
/// # Example
/// ```
/// assert!(ongen_text::is_english_only("Bad Apple!!"));
/// assert!(!ongen_text::is_english_only("東方紅魔郷"));
/// assert!(!ongen_text::is_english_only(""));
/// ```
pub fn is_english_only(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| matches!(c, '\t' | '\n' | '\r' | ' '..='~'))
}

/// Returns `true` if the text contains any hiragana, katakana (full or
/// half-width) or CJK ideograph.
pub fn contains_japanese(text: &str) -> bool {
    text.chars().any(is_japanese)
}

#[inline]
fn is_japanese(c: char) -> bool {
    const RANGES: [std::ops::RangeInclusive<char>; 4] = [
        '\u{3040}'..='\u{30FF}', // Hiragana + Katakana
        '\u{FF66}'..='\u{FF9D}', // Half-width Katakana
        '\u{4E00}'..='\u{9FFF}', // CJK Unified Ideographs
        '\u{3400}'..='\u{4DBF}', // CJK Extension A
    ];
    RANGES.iter().any(|r| r.contains(&c))
}
