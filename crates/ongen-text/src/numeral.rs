//! Kanji numeral conversion.
//!
//! Handles regular numerals (一, 二, …), formal "daiji" variants (壱, 貳, …)
//! and positional composition with 十/百/千, e.g. 百二十三 → 123.

use crate::glyph::{lookup_numeral, NumeralGlyph};

/// Convert a kanji numeral token into a positive integer.
///
/// Returns `None` for empty input, for any character outside the numeral
/// alphabet (ASCII digits included), for a result of zero, and for values
/// that do not fit in a `u32`.
///
/// # Example
/// ```
/// use ongen_text::kanji_to_number;
///
/// assert_eq!(kanji_to_number("二十一"), Some(21));
/// assert_eq!(kanji_to_number("十"), Some(10));
/// assert_eq!(kanji_to_number("壱"), Some(1));
/// assert_eq!(kanji_to_number("〇"), None);
/// assert_eq!(kanji_to_number("21"), None);
/// ```
pub fn kanji_to_number(token: &str) -> Option<u32> {
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(NumeralGlyph::Digit(d)) = lookup_numeral(c) {
            return (d > 0).then_some(d);
        }
    }

    let mut result: u32 = 0;
    let mut current: u32 = 0;

    for c in token.chars() {
        match lookup_numeral(c)? {
            NumeralGlyph::Digit(d) => {
                current = current.checked_mul(10)?.checked_add(d)?;
            }
            NumeralGlyph::Multiplier(m) => {
                // A bare multiplier counts once: 十 is 10, not 0.
                let unit = if current == 0 { 1 } else { current };
                result = result.checked_add(unit.checked_mul(m)?)?;
                current = 0;
            }
        }
    }

    result = result.checked_add(current)?;
    (result > 0).then_some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_digits() {
        assert_eq!(kanji_to_number("一"), Some(1));
        assert_eq!(kanji_to_number("五"), Some(5));
        assert_eq!(kanji_to_number("九"), Some(9));
    }

    #[test]
    fn positional_round_trip() {
        let cases = [
            ("一", 1),
            ("二", 2),
            ("三", 3),
            ("九", 9),
            ("十", 10),
            ("十一", 11),
            ("二十", 20),
            ("二十一", 21),
            ("九十九", 99),
            ("百", 100),
            ("百一", 101),
            ("百二十三", 123),
            ("三百", 300),
        ];
        for (token, expected) in cases {
            assert_eq!(kanji_to_number(token), Some(expected), "token: {token}");
        }
    }

    #[test]
    fn thousands() {
        assert_eq!(kanji_to_number("千"), Some(1000));
        assert_eq!(kanji_to_number("二千二十四"), Some(2024));
    }

    #[test]
    fn zero_rejected() {
        assert_eq!(kanji_to_number("〇"), None);
        assert_eq!(kanji_to_number("零"), None);
        assert_eq!(kanji_to_number("〇〇"), None);
    }

    #[test]
    fn digit_sequence_without_multiplier() {
        // Digit-by-digit spelling, as in 二〇二四.
        assert_eq!(kanji_to_number("二〇二四"), Some(2024));
        assert_eq!(kanji_to_number("一〇"), Some(10));
    }

    #[test]
    fn legacy_glyph_equivalence() {
        assert_eq!(kanji_to_number("壱"), Some(1));
        assert_eq!(kanji_to_number("壹"), Some(1));
        assert_eq!(kanji_to_number("弐"), Some(2));
        assert_eq!(kanji_to_number("貳"), Some(2));
        assert_eq!(kanji_to_number("貮"), Some(2));
        assert_eq!(kanji_to_number("参"), Some(3));
    }

    #[test]
    fn legacy_positional() {
        assert_eq!(kanji_to_number("弐拾壱"), Some(21));
        assert_eq!(kanji_to_number("佰"), Some(100));
    }

    #[test]
    fn rejects_foreign_characters() {
        assert_eq!(kanji_to_number(""), None);
        assert_eq!(kanji_to_number("いち"), None);
        assert_eq!(kanji_to_number("21"), None);
        assert_eq!(kanji_to_number("二十a"), None);
        assert_eq!(kanji_to_number("第二"), None);
        assert_eq!(kanji_to_number(" 二"), None);
    }

    #[test]
    fn overflow_fails_closed() {
        let long = "九".repeat(32);
        assert_eq!(kanji_to_number(&long), None);
    }
}
