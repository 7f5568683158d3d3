//! Outcome of a run

use super::asset::AssetKind;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub kind: AssetKind,
    pub asset: String,
}

#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub written: Vec<WrittenFile>,
    /// Names of assets that matched no known package suffix.
    pub skipped: Vec<String>,
    pub dry_run: bool,
}

impl RunReport {
    pub fn record(&mut self, asset: &str, kind: AssetKind, paths: Vec<PathBuf>) {
        self.written.extend(paths.into_iter().map(|path| WrittenFile {
            path,
            kind,
            asset: asset.to_string(),
        }));
    }

    pub fn files_of(&self, kind: AssetKind) -> impl Iterator<Item = &WrittenFile> {
        self.written.iter().filter(move |f| f.kind == kind)
    }
}
