//! Firefox update manifest parsing

use crate::models::UpdateManifest;
use anyhow::{Context, Result};
use log::warn;
use serde_json::Value;
use std::path::Path;

/// Parse an `update.json` document from bytes
pub fn parse_update_manifest(content: &[u8]) -> Result<UpdateManifest> {
    let content_str = std::str::from_utf8(content)
        .context("Invalid UTF-8 in update.json")?;

    // Release tooling sometimes leaves a trailing newline or BOM behind
    let trimmed = content_str.trim_start_matches('\u{feff}').trim();

    let value: Value = serde_json::from_str(trimmed).context("Failed to parse update.json")?;
    if !value.is_object() {
        warn!("update.json is not a JSON object, starting from an empty manifest");
        return Ok(UpdateManifest::default());
    }

    serde_json::from_value(value).context("Failed to read update.json")
}

/// Parse an `update.json` document from a file path
pub fn parse_update_manifest_from_file(path: impl AsRef<Path>) -> Result<UpdateManifest> {
    let path = path.as_ref();
    let content = std::fs::read(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_update_manifest(&content)
        .with_context(|| format!("Invalid update manifest at {}", path.display()))
}

/// Serialize a manifest the way it is stored on disk: 2-space indented JSON
pub fn render_update_manifest(manifest: &UpdateManifest) -> Result<String> {
    serde_json::to_string_pretty(manifest).context("Failed to serialize update.json")
}
