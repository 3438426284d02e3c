use regex::Regex;
use std::sync::LazyLock;

use super::{numeral_run, parse_positive};
use crate::numeral::kanji_to_number;

// ── Regex patterns ──────────────────────────────────────────────

/// "Vol.3", "Vol 3", "vol-3", "Volume 3".
static RE_VOL_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bvol(?:ume)?\.?[\s-]*([0-9]+)").unwrap());

/// "第3巻", "3巻".
static RE_ARABIC_MAKI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:第\s*)?([0-9]+)\s*巻").unwrap());

/// "第三巻", "三巻".
static RE_KANJI_MAKI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?:第)?({})巻", numeral_run())).unwrap()
});

/// Extract a volume number from an album or book title.
///
/// Tries the Latin "Vol." forms first, then the Japanese 巻 counter with
/// arabic or kanji numerals. Zero is never a volume.
///
/// # Example
/// ```
/// use ongen_text::parse_volume;
///
/// assert_eq!(parse_volume("東方アレンジ集 Vol.3"), Some(3));
/// assert_eq!(parse_volume("幻想郷縁起 第三巻"), Some(3));
/// assert_eq!(parse_volume("幻想郷縁起"), None);
/// ```
pub fn parse_volume(text: &str) -> Option<u32> {
    if let Some(caps) = RE_VOL_WORD.captures(text) {
        return parse_positive(&caps[1]);
    }
    if let Some(caps) = RE_ARABIC_MAKI.captures(text) {
        return parse_positive(&caps[1]);
    }
    if let Some(caps) = RE_KANJI_MAKI.captures(text) {
        return kanji_to_number(&caps[1]);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_forms() {
        assert_eq!(parse_volume("Best Vol.3"), Some(3));
        assert_eq!(parse_volume("Best vol 12"), Some(12));
        assert_eq!(parse_volume("Best VOLUME 2"), Some(2));
        assert_eq!(parse_volume("Best Vol-4 Limited"), Some(4));
    }

    #[test]
    fn not_a_volume_word() {
        assert_eq!(parse_volume("Revolution 9"), None);
        assert_eq!(parse_volume("Volcano 2"), None);
    }

    #[test]
    fn japanese_counter() {
        assert_eq!(parse_volume("第3巻"), Some(3));
        assert_eq!(parse_volume("12巻"), Some(12));
        assert_eq!(parse_volume("第十二巻"), Some(12));
        assert_eq!(parse_volume("上巻"), None);
    }

    #[test]
    fn zero_is_none() {
        assert_eq!(parse_volume("Vol.0"), None);
        assert_eq!(parse_volume("第〇巻"), None);
    }

    #[test]
    fn no_volume() {
        assert_eq!(parse_volume(""), None);
        assert_eq!(parse_volume("東方紅魔郷"), None);
    }
}
