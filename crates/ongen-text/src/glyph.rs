use phf::phf_map;

/// What a single kanji numeral glyph contributes to a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralGlyph {
    /// A unit digit, 0 through 9.
    Digit(u32),
    /// A positional multiplier: 10, 100 or 1000.
    Multiplier(u32),
}

/// Compile-time kanji numeral lookup table.
///
/// Common glyphs and their formal "daiji" variants map to the same value.
pub static KANJI_NUMERALS: phf::Map<char, NumeralGlyph> = phf_map! {
    // ── Digits ───────────────────────────────────────────────────
    '〇' => NumeralGlyph::Digit(0),
    '零' => NumeralGlyph::Digit(0),
    '一' => NumeralGlyph::Digit(1),
    '壱' => NumeralGlyph::Digit(1),
    '壹' => NumeralGlyph::Digit(1),
    '弌' => NumeralGlyph::Digit(1),
    '二' => NumeralGlyph::Digit(2),
    '弐' => NumeralGlyph::Digit(2),
    '貳' => NumeralGlyph::Digit(2),
    '貮' => NumeralGlyph::Digit(2),
    '弍' => NumeralGlyph::Digit(2),
    '三' => NumeralGlyph::Digit(3),
    '参' => NumeralGlyph::Digit(3),
    '參' => NumeralGlyph::Digit(3),
    '弎' => NumeralGlyph::Digit(3),
    '四' => NumeralGlyph::Digit(4),
    '肆' => NumeralGlyph::Digit(4),
    '五' => NumeralGlyph::Digit(5),
    '伍' => NumeralGlyph::Digit(5),
    '六' => NumeralGlyph::Digit(6),
    '陸' => NumeralGlyph::Digit(6),
    '七' => NumeralGlyph::Digit(7),
    '漆' => NumeralGlyph::Digit(7),
    '柒' => NumeralGlyph::Digit(7),
    '八' => NumeralGlyph::Digit(8),
    '捌' => NumeralGlyph::Digit(8),
    '九' => NumeralGlyph::Digit(9),
    '玖' => NumeralGlyph::Digit(9),

    // ── Positional multipliers ───────────────────────────────────
    '十' => NumeralGlyph::Multiplier(10),
    '拾' => NumeralGlyph::Multiplier(10),
    '什' => NumeralGlyph::Multiplier(10),
    '百' => NumeralGlyph::Multiplier(100),
    '佰' => NumeralGlyph::Multiplier(100),
    '陌' => NumeralGlyph::Multiplier(100),
    '千' => NumeralGlyph::Multiplier(1000),
    '仟' => NumeralGlyph::Multiplier(1000),
    '阡' => NumeralGlyph::Multiplier(1000),
};

/// Full-width punctuation and its half-width replacement.
///
/// Every target is ASCII, so no replacement can feed another entry.
pub static FULLWIDTH_SYMBOLS: phf::Map<char, char> = phf_map! {
    '／' => '/',
    '：' => ':',
    '（' => '(',
    '）' => ')',
    '\u{3000}' => ' ', // ideographic space
    '！' => '!',
    '？' => '?',
    '＆' => '&',
    '＝' => '=',
    '＋' => '+',
    '－' => '-',
    '＊' => '*',
    '＠' => '@',
    '＃' => '#',
    '％' => '%',
    '＄' => '$',
    '＼' => '\\',
    '｜' => '|',
    '＜' => '<',
    '＞' => '>',
    '［' => '[',
    '］' => ']',
    '｛' => '{',
    '｝' => '}',
    '＂' => '"',
    '＇' => '\'',
    '，' => ',',
    '．' => '.',
};

/// Counter words that close an ordinal frame such as `第二十一回`.
pub const COUNTER_WORDS: &[char] = &[
    '回', '幕', '章', '弾', '部', '期', '話', '巻', '節', '編', '夜', '祭', '宴', '弦',
];

/// Look up a kanji numeral glyph.
pub fn lookup_numeral(c: char) -> Option<NumeralGlyph> {
    KANJI_NUMERALS.get(&c).copied()
}

/// Regex character class body covering every kanji numeral glyph.
///
/// None of the glyphs are regex metacharacters, so the keys can be
/// concatenated as-is.
pub(crate) fn numeral_class() -> String {
    KANJI_NUMERALS.keys().collect()
}

/// Regex character class body covering every counter word.
pub(crate) fn counter_class() -> String {
    COUNTER_WORDS.iter().collect()
}
