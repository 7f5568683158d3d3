//! Release assets handed to the tool by the release pipeline

use serde::{Deserialize, Serialize};

pub const FIREFOX_PACKAGE_SUFFIX: &str = ".xpi";
pub const CHROME_PACKAGE_SUFFIX: &str = ".crx";

/// A single built package attached to a release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseAsset {
    /// File name of the package; only its suffix matters.
    pub name: String,

    /// Gecko add-on id or Chrome app id.
    pub id: String,

    /// Download URL of the package.
    pub url: String,

    /// Hex SHA-256 of the package.
    #[serde(default)]
    pub hash: String,

    /// Minimum host application version required by this package.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_version: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Firefox,
    Chrome,
    Unsupported,
}

impl ReleaseAsset {
    pub fn kind(&self) -> AssetKind {
        if self.name.ends_with(FIREFOX_PACKAGE_SUFFIX) {
            AssetKind::Firefox
        } else if self.name.ends_with(CHROME_PACKAGE_SUFFIX) {
            AssetKind::Chrome
        } else {
            AssetKind::Unsupported
        }
    }

    /// Minimum version, treating an empty string the same as no value.
    pub fn min_version(&self) -> Option<&str> {
        self.min_version.as_deref().filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(name: &str) -> ReleaseAsset {
        ReleaseAsset {
            name: name.to_string(),
            id: "ext@example.com".to_string(),
            url: format!("https://x/{}", name),
            hash: "abc123".to_string(),
            min_version: None,
        }
    }

    #[test]
    fn test_kind_from_suffix() {
        assert_eq!(asset("ext.xpi").kind(), AssetKind::Firefox);
        assert_eq!(asset("ext.crx").kind(), AssetKind::Chrome);
        assert_eq!(asset("ext.zip").kind(), AssetKind::Unsupported);
        assert_eq!(asset("ext.xpi.sig").kind(), AssetKind::Unsupported);
    }

    #[test]
    fn test_empty_min_version_is_absent() {
        let mut a = asset("ext.xpi");
        a.min_version = Some(String::new());
        assert_eq!(a.min_version(), None);

        a.min_version = Some("78.0".to_string());
        assert_eq!(a.min_version(), Some("78.0"));
    }
}
