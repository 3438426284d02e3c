use crate::elements::{EventSeries, SuggestResult};
use crate::parser::edition::extract_edition;

/// Suggest a series and edition for a free-text event name.
///
/// Strategy:
/// 1. Longest series name contained in the event name (case-insensitive).
///    Longest-first makes "東方紅楼夢" win over "紅楼夢".
/// 2. Otherwise, longest series name that contains the event name, for
///    truncated input.
/// 3. Edition from the text after the matched name, then the text before it.
///    Without a series match the whole event name is searched.
///
/// A blank event name or an empty catalog yields an empty result.
///
/// # Example
/// ```
/// use ongen_text::{suggest_from_event_name, EventSeries};
///
/// let catalog = vec![EventSeries { id: "reitaisai".into(), name: "博麗神社例大祭".into() }];
/// let result = suggest_from_event_name("第二十一回博麗神社例大祭", &catalog);
/// assert_eq!(result.series_id.as_deref(), Some("reitaisai"));
/// assert_eq!(result.edition, Some(21));
/// ```
#[tracing::instrument(name = "suggest", skip(series_list), fields(candidates = series_list.len()))]
pub fn suggest_from_event_name(event_name: &str, series_list: &[EventSeries]) -> SuggestResult {
    let event_name = event_name.trim();
    if event_name.is_empty() || series_list.is_empty() {
        return SuggestResult::default();
    }

    let query = event_name.to_lowercase();
    let candidates = by_length_desc(series_list);

    // Pass 1: series name inside the event name.
    for (series, name) in &candidates {
        if let Some(pos) = query.find(name.as_str()) {
            let after = &query[pos + name.len()..];
            let before = &query[..pos];
            let edition = extract_edition(after).or_else(|| extract_edition(before));
            tracing::debug!(series = %series.id, edition = ?edition, "Series contained in event name");
            return SuggestResult {
                series_id: Some(series.id.clone()),
                edition,
            };
        }
    }

    // Pass 2: event name inside a series name (partial input).
    for (series, name) in &candidates {
        if name.contains(query.as_str()) {
            let edition = extract_edition(&query);
            tracing::debug!(series = %series.id, edition = ?edition, "Event name contained in series");
            return SuggestResult {
                series_id: Some(series.id.clone()),
                edition,
            };
        }
    }

    let edition = extract_edition(&query);
    tracing::debug!(edition = ?edition, "No series match");
    SuggestResult {
        series_id: None,
        edition,
    }
}

/// Lower-cased candidate names, longest first. Ties keep catalog order.
/// Blank names are dropped since they would match everything.
fn by_length_desc(series_list: &[EventSeries]) -> Vec<(&EventSeries, String)> {
    let mut candidates: Vec<(&EventSeries, String)> = series_list
        .iter()
        .filter(|s| !s.name.trim().is_empty())
        .map(|s| (s, s.name.to_lowercase()))
        .collect();
    candidates.sort_by(|(_, a), (_, b)| b.chars().count().cmp(&a.chars().count()));
    candidates
}
