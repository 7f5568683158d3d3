//! Output locations for a named extension

use std::path::{Path, PathBuf};

pub const FIREFOX_MANIFEST_FILE: &str = "update.json";
pub const CHROME_MANIFEST_FILE: &str = "update.xml";

/// Header Editor is published under two folder names.
const HEADER_EDITOR: &str = "header-editor";
const HEADER_EDITOR_MIRROR: &str = "headereditor";

/// xStyle's updater polls `updates.xml` as well as `update.xml`.
const XSTYLE: &str = "xstyle";
const XSTYLE_CHROME_MANIFEST_FILE: &str = "updates.xml";

const INSTALL_DIR: &str = "install";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTargets {
    /// Every folder that must hold an identical copy of each manifest.
    pub folders: Vec<PathBuf>,
    /// File names the Chrome manifest is written under, in each folder.
    pub chrome_files: Vec<&'static str>,
}

impl OutputTargets {
    pub fn resolve(output_root: &Path, name: &str) -> Self {
        let mut folders = vec![output_root.join(name).join(INSTALL_DIR)];
        if name == HEADER_EDITOR {
            folders.push(output_root.join(HEADER_EDITOR_MIRROR).join(INSTALL_DIR));
        }

        let mut chrome_files = vec![CHROME_MANIFEST_FILE];
        if name == XSTYLE {
            chrome_files.push(XSTYLE_CHROME_MANIFEST_FILE);
        }

        Self { folders, chrome_files }
    }

    pub fn firefox_manifest_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.folders.iter().map(|folder| folder.join(FIREFOX_MANIFEST_FILE))
    }

    pub fn chrome_manifest_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.folders.iter().flat_map(move |folder| {
            self.chrome_files.iter().map(move |file| folder.join(file))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_folder() {
        let targets = OutputTargets::resolve(Path::new("/out"), "my-ext");
        assert_eq!(targets.folders, vec![PathBuf::from("/out/my-ext/install")]);
        assert_eq!(targets.chrome_files, vec!["update.xml"]);
    }

    #[test]
    fn test_header_editor_is_mirrored() {
        let targets = OutputTargets::resolve(Path::new("/out"), "header-editor");
        assert_eq!(
            targets.folders,
            vec![
                PathBuf::from("/out/header-editor/install"),
                PathBuf::from("/out/headereditor/install"),
            ]
        );
        assert_eq!(targets.firefox_manifest_paths().count(), 2);
    }

    #[test]
    fn test_xstyle_writes_two_chrome_files() {
        let targets = OutputTargets::resolve(Path::new("/out"), "xstyle");
        let paths: Vec<_> = targets.chrome_manifest_paths().collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/out/xstyle/install/update.xml"),
                PathBuf::from("/out/xstyle/install/updates.xml"),
            ]
        );
    }
}
