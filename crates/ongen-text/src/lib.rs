//! Text normalization and number extraction for discography catalog data.
//!
//! Everything here is a pure function over strings: script detection,
//! full-width symbol folding, kanji numeral conversion, disc/volume/edition
//! extraction and event series suggestion. The lookup tables are static and
//! never mutated, so every function can be called from any thread.

pub mod elements;
pub mod error;
pub mod glyph;
pub mod matcher;
pub mod name_info;
pub mod numeral;
pub mod parser;
pub mod script;
pub mod symbols;
pub mod url_pattern;

pub use elements::{DiscInfo, EventEditionInfo, EventSeries, NameInfo, SuggestResult};
pub use error::TextError;
pub use matcher::suggest_from_event_name;
pub use name_info::{generate_name_info, generate_sort_name};
pub use numeral::kanji_to_number;
pub use parser::disc::parse_disc_info;
pub use parser::edition::{extract_edition, parse_event_edition};
pub use parser::volume::parse_volume;
pub use script::{contains_japanese, is_english_only};
pub use symbols::normalize_fullwidth_symbols;
pub use url_pattern::UrlPattern;
