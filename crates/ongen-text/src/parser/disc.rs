use regex::Regex;
use std::sync::LazyLock;

use super::parse_positive;
use crate::elements::DiscInfo;

// ── Regex patterns ──────────────────────────────────────────────

/// Disc markers in precedence order. Every pattern is anchored at the end of
/// the title and captures `(title, number)`.
static DISC_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // "Album DISC-2", "Album Disc 2", "Album disc2"
        r"(?i)^(.*?)\s*dis[ck][\s-]?([0-9]+)$",
        // "Album [Disc 2]"
        r"(?i)^(.*?)\s*\[\s*dis[ck][\s-]?([0-9]+)\s*\]$",
        // "Album 【Disc 2】"
        r"(?i)^(.*?)\s*【\s*dis[ck][\s-]?([0-9]+)\s*】$",
        // "Album (Disc 2)"
        r"(?i)^(.*?)\s*\(\s*dis[ck][\s-]?([0-9]+)\s*\)$",
    ]
    .into_iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Split a disc marker off an album title.
///
/// A title without a marker is disc 1. Empty input is returned untouched.
///
/// # Example
/// ```
/// let info = ongen_text::parse_disc_info("東方紅魔郷 Original Soundtrack DISC-2");
/// assert_eq!(info.name, "東方紅魔郷 Original Soundtrack");
/// assert_eq!(info.disc_number, 2);
/// ```
pub fn parse_disc_info(album_name: &str) -> DiscInfo {
    if album_name.is_empty() {
        return DiscInfo {
            name: album_name.to_string(),
            disc_number: 1,
        };
    }

    let trimmed = album_name.trim();
    for pattern in DISC_PATTERNS.iter() {
        let Some(caps) = pattern.captures(trimmed) else {
            continue;
        };
        // "Disc 0" is not a marker; let later patterns and the default decide.
        if let Some(disc_number) = parse_positive(&caps[2]) {
            return DiscInfo {
                name: caps[1].trim().to_string(),
                disc_number,
            };
        }
    }

    DiscInfo {
        name: trimmed.to_string(),
        disc_number: 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disc(name: &str, n: u32) -> DiscInfo {
        DiscInfo {
            name: name.to_string(),
            disc_number: n,
        }
    }

    #[test]
    fn no_marker_defaults_to_disc_one() {
        assert_eq!(parse_disc_info("アルバム名"), disc("アルバム名", 1));
        assert_eq!(parse_disc_info("  アルバム名  "), disc("アルバム名", 1));
    }

    #[test]
    fn empty_input_unchanged() {
        assert_eq!(parse_disc_info(""), disc("", 1));
    }

    #[test]
    fn whitespace_only_is_trimmed() {
        assert_eq!(parse_disc_info("   "), disc("", 1));
    }

    #[test]
    fn bare_suffix_variants() {
        assert_eq!(parse_disc_info("アルバム名 DISC-2"), disc("アルバム名", 2));
        assert_eq!(parse_disc_info("アルバム名 Disc 2"), disc("アルバム名", 2));
        assert_eq!(parse_disc_info("アルバム名 disc2"), disc("アルバム名", 2));
        assert_eq!(parse_disc_info("アルバム名 Disk 3"), disc("アルバム名", 3));
        assert_eq!(parse_disc_info("アルバム名disc2"), disc("アルバム名", 2));
    }

    #[test]
    fn bracketed_forms() {
        assert_eq!(parse_disc_info("Album [Disc 2]"), disc("Album", 2));
        assert_eq!(parse_disc_info("Album 【DISC-3】"), disc("Album", 3));
        assert_eq!(parse_disc_info("Album (disc 4)"), disc("Album", 4));
        assert_eq!(parse_disc_info("Album ( Disc 10 )"), disc("Album", 10));
    }

    #[test]
    fn marker_must_be_at_end() {
        assert_eq!(
            parse_disc_info("Disc 2 Collection"),
            disc("Disc 2 Collection", 1)
        );
        assert_eq!(parse_disc_info("Album (Disc 2) Bonus"), disc("Album (Disc 2) Bonus", 1));
    }

    #[test]
    fn leading_zero() {
        assert_eq!(parse_disc_info("Album Disc 02"), disc("Album", 2));
    }

    #[test]
    fn disc_zero_is_not_a_marker() {
        assert_eq!(parse_disc_info("Album Disc 0"), disc("Album Disc 0", 1));
    }

    #[test]
    fn other_parentheses_kept() {
        assert_eq!(
            parse_disc_info("Album (Limited Edition) Disc 2"),
            disc("Album (Limited Edition)", 2)
        );
    }

    #[test]
    fn full_width_space_before_marker() {
        assert_eq!(parse_disc_info("アルバム名\u{3000}DISC 2"), disc("アルバム名", 2));
    }
}
