//! Browser extension update manifest writer
//!
//! Given an extension name, a release version and the list of built release
//! assets, writes the manifests polled by the Firefox (`update.json`) and
//! Chrome (`update.xml`) auto-updaters. Firefox manifests keep a history of
//! releases, one per minimum browser version; Chrome manifests describe only
//! the latest release.

pub mod config;
pub mod merger;
pub mod models;
pub mod parser;
pub mod targets;
pub mod writer;

pub use config::{ConfigError, RunConfig};
pub use models::{AssetKind, HistoryEntry, ReleaseAsset, RunReport, UpdateEntry, UpdateManifest};
pub use targets::OutputTargets;

use anyhow::Result;
use log::debug;
use writer::Materializer;

/// Main entry point: write every manifest the release's assets call for
pub fn run(config: &RunConfig) -> Result<RunReport> {
    let targets = OutputTargets::resolve(&config.output_root, &config.name);
    let materializer = Materializer::new(config.dry_run);

    let mut report = RunReport {
        dry_run: materializer.is_dry_run(),
        ..RunReport::default()
    };

    // Assets are processed strictly in order so that two packages for the
    // same addon id merge into one history.
    for asset in &config.assets {
        let kind = asset.kind();
        let paths = match kind {
            AssetKind::Firefox => {
                writer::write_firefox_update(asset, &targets, &config.version, &materializer)?
            }
            AssetKind::Chrome => {
                writer::write_chrome_update(asset, &targets, &config.version, &materializer)?
            }
            AssetKind::Unsupported => {
                debug!("skipping {}: not a browser package", asset.name);
                report.skipped.push(asset.name.clone());
                continue;
            }
        };
        report.record(&asset.name, kind, paths);
    }

    Ok(report)
}
