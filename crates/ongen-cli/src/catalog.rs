//! Series catalog loading.
//!
//! The catalog is a TOML file with one `[[series]]` table per event series:
//!
//! ```toml
//! [[series]]
//! id = "reitaisai"
//! name = "博麗神社例大祭"
//! ```

use std::path::Path;

use ongen_text::EventSeries;
use serde::Deserialize;

use crate::error::CliError;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    series: Vec<EventSeries>,
}

/// Read a series catalog from disk.
pub fn load_catalog(path: &Path) -> Result<Vec<EventSeries>, CliError> {
    let content = std::fs::read_to_string(path)?;
    let series = parse_catalog(&content)
        .map_err(|e| CliError::Catalog(format!("{}: {e}", path.display())))?;
    tracing::debug!(path = %path.display(), count = series.len(), "Loaded series catalog");
    Ok(series)
}

fn parse_catalog(content: &str) -> Result<Vec<EventSeries>, toml::de::Error> {
    toml::from_str::<CatalogFile>(content).map(|c| c.series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_catalog() {
        let series = parse_catalog(
            r#"
            [[series]]
            id = "reitaisai"
            name = "博麗神社例大祭"

            [[series]]
            id = "kouroumu"
            name = "東方紅楼夢"
            "#,
        )
        .unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].id, "reitaisai");
        assert_eq!(series[1].name, "東方紅楼夢");
    }

    #[test]
    fn test_empty_catalog() {
        assert!(parse_catalog("").unwrap().is_empty());
    }

    #[test]
    fn test_missing_field_rejected() {
        assert!(parse_catalog("[[series]]\nid = \"x\"").is_err());
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[series]]\nid = \"m3\"\nname = \"M3\"").unwrap();

        let series = load_catalog(file.path()).unwrap();
        assert_eq!(
            series,
            vec![EventSeries {
                id: "m3".into(),
                name: "M3".into()
            }]
        );
    }

    #[test]
    fn test_load_catalog_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "series = 3").unwrap();
        assert!(matches!(load_catalog(file.path()), Err(CliError::Catalog(_))));
    }
}
