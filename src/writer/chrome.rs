//! Chrome `update.xml` writer (gupdate protocol 2.0)

use super::Materializer;
use crate::models::ReleaseAsset;
use crate::targets::OutputTargets;
use anyhow::Result;
use log::info;
use std::path::PathBuf;

const GUPDATE_NAMESPACE: &str = "http://www.google.com/update2/response";

/// Render the update response for a single release. There is no history:
/// the document only ever describes the current version.
pub fn render_update_xml(asset: &ReleaseAsset, version: &str) -> String {
    let min_version_attr = asset
        .min_version()
        .map(|v| format!("prodversionmin='{}' ", escape_attr(v)))
        .unwrap_or_default();

    format!(
        "<?xml version='1.0' encoding='UTF-8'?>\
         <gupdate xmlns='{}' protocol='2.0'>\
         <app appid='{}'>\
         <updatecheck codebase='{}' version='{}' {}/>\
         </app>\
         </gupdate>",
        GUPDATE_NAMESPACE,
        escape_attr(&asset.id),
        escape_attr(&asset.url),
        escape_attr(version),
        min_version_attr,
    )
}

/// Escape a value for use inside a single-quoted XML attribute
fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn write_chrome_update(
    asset: &ReleaseAsset,
    targets: &OutputTargets,
    version: &str,
    materializer: &Materializer,
) -> Result<Vec<PathBuf>> {
    let content = render_update_xml(asset, version);

    let mut written = Vec::new();
    for path in targets.chrome_manifest_paths() {
        info!("write {} for {}", path.display(), asset.name);
        materializer.write(&path, &content)?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crx(min_version: Option<&str>) -> ReleaseAsset {
        ReleaseAsset {
            name: "ext.crx".to_string(),
            id: "abcd".to_string(),
            url: "https://x/ext.crx".to_string(),
            hash: String::new(),
            min_version: min_version.map(str::to_string),
        }
    }

    #[test]
    fn test_render_without_min_version() {
        let xml = render_update_xml(&crx(None), "1.2.0");
        assert_eq!(
            xml,
            "<?xml version='1.0' encoding='UTF-8'?><gupdate xmlns='http://www.google.com/update2/response' protocol='2.0'><app appid='abcd'><updatecheck codebase='https://x/ext.crx' version='1.2.0' /></app></gupdate>"
        );
        assert!(!xml.contains("prodversionmin"));
    }

    #[test]
    fn test_render_with_min_version() {
        let xml = render_update_xml(&crx(Some("88")), "1.2.0");
        assert!(xml.contains("<updatecheck codebase='https://x/ext.crx' version='1.2.0' prodversionmin='88' />"));
    }

    #[test]
    fn test_render_escapes_attributes() {
        let mut asset = crx(None);
        asset.url = "https://x/dl?file=ext.crx&v='1'".to_string();
        let xml = render_update_xml(&asset, "1.0");
        assert!(xml.contains("codebase='https://x/dl?file=ext.crx&amp;v=&apos;1&apos;'"));
    }
}
