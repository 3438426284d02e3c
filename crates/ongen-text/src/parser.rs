//! Ordered-pattern extractors for disc, volume and edition numbers.
//!
//! Each extractor keeps a fixed list of patterns and returns on the first
//! one that matches. Reordering a list changes results on ambiguous input.

pub mod disc;
pub mod edition;
pub mod volume;

use crate::glyph;

/// `[回幕…]` over all counter words.
pub(crate) fn counter_group() -> String {
    format!("[{}]", glyph::counter_class())
}

/// `[一二…]+` over the kanji numeral alphabet.
pub(crate) fn numeral_run() -> String {
    format!("[{}]+", glyph::numeral_class())
}

/// Parse an ASCII digit run as a positive number.
///
/// Zero and values that overflow `u32` yield `None`.
pub(crate) fn parse_positive(digits: &str) -> Option<u32> {
    digits.parse::<u32>().ok().filter(|&n| n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_numbers() {
        assert_eq!(parse_positive("21"), Some(21));
        assert_eq!(parse_positive("007"), Some(7));
        assert_eq!(parse_positive("0"), None);
        assert_eq!(parse_positive("99999999999"), None);
        assert_eq!(parse_positive(""), None);
    }
}
