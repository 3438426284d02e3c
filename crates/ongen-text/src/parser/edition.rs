use regex::Regex;
use std::sync::LazyLock;

use super::{counter_group, numeral_run, parse_positive};
use crate::elements::EventEditionInfo;
use crate::numeral::kanji_to_number;

/// Arabic editions at or above this value are taken to be years
/// ("M3 2024春") by [`parse_event_edition`].
const YEAR_LIKE_EDITION: u32 = 1000;

// ── Regex patterns ──────────────────────────────────────────────

/// Any run of ASCII digits. `\d` would also admit full-width digits.
static RE_ARABIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// "第二十一回", "第三夜".
static RE_ORDINAL_KANJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("第({}){}", numeral_run(), counter_group())).unwrap()
});

/// Trailing "二十一", "壱", "三回" with no 第 prefix.
static RE_KANJI_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("({}){}?$", numeral_run(), counter_group())).unwrap()
});

/// Whole ordinal frame for removal: "第21回", "第二十一回", "第5".
static RE_ORDINAL_FRAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"第\s*([0-9]+|{})\s*{}?",
        numeral_run(),
        counter_group()
    ))
    .unwrap()
});

/// Extract an edition number from free text.
///
/// Strategies, first success wins:
/// 1. The first ASCII digit run anywhere ("C104" → 104). Arabic digits beat
///    kanji, so "第21回" is 21 through this path.
/// 2. `第` + kanji numeral + counter word ("第二十一回" → 21).
/// 3. A kanji numeral at the end, optionally followed by a counter word.
///
/// No plausibility ceiling is applied; see [`parse_event_edition`] for the
/// variant that rejects year-like values.
///
/// # Example
/// ```
/// use ongen_text::extract_edition;
///
/// assert_eq!(extract_edition("C104"), Some(104));
/// assert_eq!(extract_edition("第二十一回"), Some(21));
/// assert_eq!(extract_edition("壱"), Some(1));
/// assert_eq!(extract_edition("例大祭"), None);
/// ```
pub fn extract_edition(text: &str) -> Option<u32> {
    if let Some(m) = RE_ARABIC.find(text) {
        tracing::trace!(digits = m.as_str(), "Edition from arabic digits");
        return parse_positive(m.as_str());
    }

    if let Some(caps) = RE_ORDINAL_KANJI.captures(text) {
        tracing::trace!(numeral = &caps[1], "Edition from ordinal frame");
        return kanji_to_number(&caps[1]);
    }

    if let Some(caps) = RE_KANJI_SUFFIX.captures(text) {
        tracing::trace!(numeral = &caps[1], "Edition from kanji suffix");
        return kanji_to_number(&caps[1]);
    }

    None
}

/// Split an event name into a base name and its edition number.
///
/// Strategies, first success wins:
/// 1. An ordinal frame anywhere ("第21回", "第二十一回"), removed from the
///    base name.
/// 2. The last ASCII digit run ("コミックマーケット104"). Values of 1000 or
///    more are years, not editions: the whole name is returned with no edition.
/// 3. A trailing kanji numeral with optional counter word.
///
/// # Example
/// ```
/// use ongen_text::parse_event_edition;
///
/// let info = parse_event_edition("博麗神社例大祭21");
/// assert_eq!(info.base_name, "博麗神社例大祭");
/// assert_eq!(info.edition, Some(21));
///
/// let info = parse_event_edition("M3 2024春");
/// assert_eq!(info.base_name, "M3 2024春");
/// assert_eq!(info.edition, None);
/// ```
pub fn parse_event_edition(text: &str) -> EventEditionInfo {
    let text = text.trim();

    if let Some(info) = from_ordinal_frame(text) {
        return info;
    }

    if let Some(m) = RE_ARABIC.find_iter(text).last() {
        let edition = parse_positive(m.as_str()).filter(|&n| n < YEAR_LIKE_EDITION);
        if edition.is_none() {
            tracing::debug!(digits = m.as_str(), "Rejected implausible edition");
            return no_edition(text);
        }
        let before = text[..m.start()].trim_end_matches(is_separator);
        let base_name = format!("{before}{}", &text[m.end()..]);
        return EventEditionInfo {
            base_name: base_name.trim().to_string(),
            edition,
        };
    }

    if let Some(caps) = RE_KANJI_SUFFIX.captures(text) {
        if let Some(edition) = kanji_to_number(&caps[1]) {
            let start = caps.get(0).map_or(text.len(), |m| m.start());
            return EventEditionInfo {
                base_name: text[..start].trim().to_string(),
                edition: Some(edition),
            };
        }
    }

    no_edition(text)
}

fn from_ordinal_frame(text: &str) -> Option<EventEditionInfo> {
    let caps = RE_ORDINAL_FRAME.captures(text)?;
    let numeral = &caps[1];
    let edition = if numeral.starts_with(|c: char| c.is_ascii_digit()) {
        parse_positive(numeral)?
    } else {
        kanji_to_number(numeral)?
    };

    let frame = caps.get(0)?;
    let base_name = format!("{}{}", &text[..frame.start()], &text[frame.end()..]);
    Some(EventEditionInfo {
        base_name: base_name.trim().to_string(),
        edition: Some(edition),
    })
}

fn no_edition(text: &str) -> EventEditionInfo {
    EventEditionInfo {
        base_name: text.to_string(),
        edition: None,
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | '_' | '#')
}
