//! Firefox `update.json` writer

use super::Materializer;
use crate::merger::{merge_update, MergeOutcome};
use crate::models::{ReleaseAsset, UpdateEntry, UpdateManifest};
use crate::parser::{parse_update_manifest_from_file, render_update_manifest};
use crate::targets::OutputTargets;
use anyhow::Result;
use log::info;
use std::path::PathBuf;

/// The first `update.json` found across the output folders, in folder order.
/// This is the single source of truth for the merge.
pub fn locate_existing_manifest(targets: &OutputTargets) -> Option<PathBuf> {
    targets.firefox_manifest_paths().find(|path| path.is_file())
}

pub fn load_manifest(targets: &OutputTargets) -> Result<UpdateManifest> {
    match locate_existing_manifest(targets) {
        Some(path) => {
            info!("read update file from {}", path.display());
            parse_update_manifest_from_file(&path)
        }
        None => Ok(UpdateManifest::default()),
    }
}

/// Merge `asset` as `version` into the existing history and write the result
/// to every output folder. Returns the paths written.
pub fn write_firefox_update(
    asset: &ReleaseAsset,
    targets: &OutputTargets,
    version: &str,
    materializer: &Materializer,
) -> Result<Vec<PathBuf>> {
    let mut manifest = load_manifest(targets)?;

    let entry = UpdateEntry::for_release(asset, version);
    match merge_update(&mut manifest, &asset.id, entry)? {
        MergeOutcome::Created => info!("{}: starting update history at {}", asset.id, version),
        MergeOutcome::Prepended { replaced } => info!(
            "{}: added {} ({} superseded)",
            asset.id,
            version,
            replaced.len()
        ),
    }

    let content = render_update_manifest(&manifest)?;

    let mut written = Vec::new();
    for path in targets.firefox_manifest_paths() {
        info!("write {} for {}", path.display(), asset.name);
        materializer.write(&path, &content)?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn xpi(min_version: Option<&str>) -> ReleaseAsset {
        ReleaseAsset {
            name: "ext.xpi".to_string(),
            id: "ext@example.com".to_string(),
            url: "https://x/ext.xpi".to_string(),
            hash: "abc123".to_string(),
            min_version: min_version.map(str::to_string),
        }
    }

    #[test]
    fn test_reads_from_mirror_when_primary_missing() {
        let temp_dir = TempDir::new().unwrap();
        let targets = OutputTargets::resolve(temp_dir.path(), "header-editor");

        let mirror = &targets.folders[1];
        fs::create_dir_all(mirror).unwrap();
        fs::write(
            mirror.join("update.json"),
            r#"{"addons":{"ext@example.com":{"updates":[{"version":"0.9.0","update_link":"https://x/old.xpi"}]}}}"#,
        )
        .unwrap();

        assert_eq!(locate_existing_manifest(&targets), Some(mirror.join("update.json")));

        write_firefox_update(&xpi(Some("78.0")), &targets, "1.0.0", &Materializer::default()).unwrap();

        let manifest = parse_update_manifest_from_file(targets.folders[0].join("update.json")).unwrap();
        let addon = manifest.addon("ext@example.com");
        let versions: Vec<_> = addon.entries().iter().filter_map(|e| e.version()).collect();
        assert_eq!(versions, vec!["1.0.0", "0.9.0"]);
    }

    #[test]
    fn test_malformed_existing_manifest_aborts() {
        let temp_dir = TempDir::new().unwrap();
        let targets = OutputTargets::resolve(temp_dir.path(), "ext");
        fs::create_dir_all(&targets.folders[0]).unwrap();
        fs::write(targets.folders[0].join("update.json"), "{ nope").unwrap();

        let result = write_firefox_update(&xpi(None), &targets, "1.0.0", &Materializer::default());
        assert!(result.is_err());
        assert_eq!(
            fs::read_to_string(targets.folders[0].join("update.json")).unwrap(),
            "{ nope"
        );
    }
}
