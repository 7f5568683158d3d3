//! Writes manifest content to disk

use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct Materializer {
    dry_run: bool,
}

impl Materializer {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Create the parent directory if needed, then replace the file contents.
    /// Not atomic: a crash mid-write leaves a truncated file behind.
    pub fn write(&self, path: &Path, content: &str) -> Result<()> {
        if self.dry_run {
            info!("write {} with {}", path.display(), content);
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }

        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a").join("b").join("update.xml");

        Materializer::new(false).write(&path, "<gupdate/>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<gupdate/>");
    }

    #[test]
    fn test_write_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("update.json");
        fs::write(&path, "a much longer previous content").unwrap();

        Materializer::new(false).write(&path, "{}").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_dry_run_touches_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("install");

        Materializer::new(true).write(&dir.join("update.json"), "{}").unwrap();
        assert!(!dir.exists());
    }
}
