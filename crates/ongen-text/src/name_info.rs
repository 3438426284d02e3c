use crate::elements::NameInfo;
use crate::script::{contains_japanese, is_english_only};
use crate::symbols::normalize_fullwidth_symbols;

/// Build the display name triple for a raw catalog name.
///
/// The name is symbol-normalized and trimmed, then placed in the English
/// slot when it is pure ASCII and in the Japanese slot otherwise.
///
/// # Example
/// ```
/// let info = ongen_text::generate_name_info("上海アリス幻樂団（ZUN）");
/// assert_eq!(info.name, "上海アリス幻樂団(ZUN)");
/// assert_eq!(info.name_ja.as_deref(), Some("上海アリス幻樂団(ZUN)"));
/// assert_eq!(info.name_en, None);
/// ```
pub fn generate_name_info(original_name: &str) -> NameInfo {
    let name = normalize_fullwidth_symbols(original_name).trim().to_string();

    if is_english_only(&name) {
        NameInfo {
            name_ja: None,
            name_en: Some(name.clone()),
            name,
        }
    } else {
        if !contains_japanese(&name) && !name.is_empty() {
            tracing::trace!(name = %name, "Non-ASCII name without Japanese script");
        }
        NameInfo {
            name_ja: Some(name.clone()),
            name_en: None,
            name,
        }
    }
}

/// Derive a sort key for a name.
///
/// Only ASCII names get one (lower-cased). Kana and kanji names need a
/// reading, which has to be supplied by hand.
pub fn generate_sort_name(name: &str) -> Option<String> {
    is_english_only(name).then(|| name.to_lowercase())
}
