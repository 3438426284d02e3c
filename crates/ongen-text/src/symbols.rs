use crate::glyph::FULLWIDTH_SYMBOLS;

/// Replace full-width punctuation with its half-width equivalent.
///
/// Letters, digits and kana are left untouched; only the fixed symbol table
/// applies. The result is idempotent under a second pass.
///
/// # Example
/// ```
/// let s = ongen_text::normalize_fullwidth_symbols("東方紅魔郷（Windows版）／ＥＸ！");
/// assert_eq!(s, "東方紅魔郷(Windows版)/ＥＸ!");
/// ```
pub fn normalize_fullwidth_symbols(text: &str) -> String {
    // Fast path: nothing to replace.
    if !text.chars().any(|c| FULLWIDTH_SYMBOLS.contains_key(&c)) {
        return text.to_string();
    }

    text.chars()
        .map(|c| FULLWIDTH_SYMBOLS.get(&c).copied().unwrap_or(c))
        .collect()
}
