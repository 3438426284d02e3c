use serde::{Deserialize, Serialize};

/// An album title split from its disc marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscInfo {
    /// Album title with the disc marker removed.
    pub name: String,
    /// Disc number, 1 when the title carries no marker.
    pub disc_number: u32,
}

/// An event name split into its series part and edition number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEditionInfo {
    pub base_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition: Option<u32>,
}

/// A recurring event franchise from the caller's catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSeries {
    pub id: String,
    pub name: String,
}

/// Series and edition inferred from a free-text event name.
///
/// Both fields are independent: an edition can be found without a series
/// and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition: Option<u32>,
}

/// Display name with its Japanese or English slot filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameInfo {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_ja: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
}
