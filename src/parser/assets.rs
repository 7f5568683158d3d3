//! Release asset list parsing

use crate::models::ReleaseAsset;
use anyhow::{Context, Result};

/// Parse the JSON array of release assets supplied by the release pipeline
pub fn parse_assets(content: &str) -> Result<Vec<ReleaseAsset>> {
    serde_json::from_str(content.trim()).context("Failed to parse release asset list")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assets() {
        let json = r#"[
            { "name": "ext.xpi", "id": "ext@example.com", "url": "https://x/ext.xpi", "hash": "abc123", "min_version": "78.0" },
            { "name": "ext.crx", "id": "abcd", "url": "https://x/ext.crx" }
        ]"#;

        let assets = parse_assets(json).unwrap();
        assert_eq!(assets.len(), 2);
        assert_eq!(assets[0].min_version.as_deref(), Some("78.0"));
        assert_eq!(assets[1].hash, "");
        assert!(assets[1].min_version.is_none());
    }

    #[test]
    fn test_parse_assets_rejects_object() {
        assert!(parse_assets(r#"{ "name": "ext.xpi" }"#).is_err());
    }

    #[test]
    fn test_parse_assets_requires_id() {
        assert!(parse_assets(r#"[{ "name": "ext.xpi", "url": "https://x" }]"#).is_err());
    }
}
