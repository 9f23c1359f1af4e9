use crate::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Operator-maintained catalog configuration.
///
/// The depot report carries no version string of its own, so releases are
/// identified through manifest-id lookup tables, refreshed externally as new
/// releases appear. The `[latest]` labels seed a brand-new history file.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Base URL recorded in history records; the per-version catalog file
    /// name is appended to it.
    pub catalog_base_url: String,
    pub latest: LatestSeeds,
    #[serde(default)]
    pub versions: VersionTables,
}

/// Newest known labels at config-authoring time, used only to initialize a
/// fresh history.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LatestSeeds {
    pub stable: String,
    pub preview: String,
}

/// Manifest-id to release-label tables, one per channel.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct VersionTables {
    #[serde(default)]
    pub stable: BTreeMap<String, String>,
    #[serde(default)]
    pub preview: BTreeMap<String, String>,
}

pub fn parse_config_str(input: &str) -> Result<CatalogConfig, CatalogError> {
    Ok(toml::from_str(input)?)
}

pub fn parse_config_file(path: impl AsRef<Path>) -> Result<CatalogConfig, CatalogError> {
    let content = fs::read_to_string(path)?;
    parse_config_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let input = r#"
catalog_base_url = "https://example.invalid/catalogs"

[latest]
stable = "41.78.16"
preview = "41.78.13-PREVIEW"

[versions.stable]
"7649580527091758034" = "41.78.16"
"6479059061804356642" = "41.78.15"

[versions.preview]
"8862225121663207731" = "41.78.13-PREVIEW"
"#;
        let config = parse_config_str(input).expect("should parse");
        assert_eq!(config.latest.stable, "41.78.16");
        assert_eq!(config.latest.preview, "41.78.13-PREVIEW");
        assert_eq!(config.versions.stable.len(), 2);
        assert_eq!(
            config.versions.preview.get("8862225121663207731"),
            Some(&"41.78.13-PREVIEW".to_owned())
        );
    }

    #[test]
    fn version_tables_default_to_empty() {
        let input = r#"
catalog_base_url = "https://example.invalid/catalogs"

[latest]
stable = "1.0.0"
preview = "1.0.0-PREVIEW"
"#;
        let config = parse_config_str(input).expect("should parse");
        assert!(config.versions.stable.is_empty());
        assert!(config.versions.preview.is_empty());
    }

    #[test]
    fn rejects_unknown_fields() {
        let input = r#"
catalog_base_url = "https://example.invalid/catalogs"
surprise = true

[latest]
stable = "1.0.0"
preview = "1.0.0-PREVIEW"
"#;
        assert!(parse_config_str(input).is_err());
    }

    #[test]
    fn rejects_missing_latest() {
        let input = r#"catalog_base_url = "https://example.invalid/catalogs""#;
        assert!(parse_config_str(input).is_err());
    }

    #[test]
    fn parse_config_file_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("depotcat.toml");
        fs::write(
            &path,
            r#"
catalog_base_url = "https://example.invalid/catalogs"

[latest]
stable = "1.0.0"
preview = "1.0.0-PREVIEW"
"#,
        )
        .unwrap();
        let config = parse_config_file(&path).expect("should parse");
        assert_eq!(config.latest.stable, "1.0.0");
    }
}
