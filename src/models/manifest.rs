//! Firefox `update.json` data structures
//!
//! Hand-edited manifests drift. Anything this crate does not recognise is
//! carried through untouched instead of failing the release.

use super::asset::ReleaseAsset;
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Key used for entries that carry no `strict_min_version`.
pub const DEFAULT_MIN_VERSION_KEY: &str = "default";

pub type JsonMap = Map<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateManifest {
    /// Addon id to addon record. Records are kept as raw JSON so that addons
    /// a run does not touch are written back exactly as they were read.
    #[serde(default, deserialize_with = "deserialize_lenient_object")]
    pub addons: JsonMap,

    #[serde(flatten)]
    pub extra: JsonMap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddonUpdates {
    /// `None` when the key is missing or holds something other than an array.
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_updates",
        skip_serializing_if = "Option::is_none"
    )]
    pub updates: Option<Vec<HistoryEntry>>,

    #[serde(flatten)]
    pub extra: JsonMap,
}

/// One element of an addon's `updates` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HistoryEntry {
    Release(UpdateEntry),
    /// Anything that does not look like an update entry, kept verbatim.
    Unrecognized(Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateEntry {
    pub version: String,

    pub update_link: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_hash: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub applications: Option<Applications>,

    #[serde(flatten)]
    pub extra: JsonMap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Applications {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gecko: Option<GeckoApplication>,

    #[serde(flatten)]
    pub extra: JsonMap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeckoApplication {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict_min_version: Option<String>,

    #[serde(flatten)]
    pub extra: JsonMap,
}

impl UpdateManifest {
    /// Typed view of one addon's record. A missing record, or one that is not
    /// a JSON object, reads as an empty addon.
    pub fn addon(&self, addon_id: &str) -> AddonUpdates {
        self.addons
            .get(addon_id)
            .map(AddonUpdates::from_value)
            .unwrap_or_default()
    }

    /// Store `addon` under `addon_id`, keeping the id's existing position.
    pub fn set_addon(&mut self, addon_id: &str, addon: AddonUpdates) -> serde_json::Result<()> {
        self.addons
            .insert(addon_id.to_string(), serde_json::to_value(addon)?);
        Ok(())
    }
}

impl AddonUpdates {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value.clone()).unwrap_or_else(|err| {
                warn!("ignoring unreadable addon record: {}", err);
                Self::default()
            }),
            Value::Null => Self::default(),
            other => {
                warn!("ignoring non-object addon record: {}", other);
                Self::default()
            }
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        self.updates.as_deref().unwrap_or_default()
    }
}

impl HistoryEntry {
    pub fn version(&self) -> Option<&str> {
        match self {
            HistoryEntry::Release(entry) => Some(&entry.version),
            HistoryEntry::Unrecognized(value) => value.get("version").and_then(Value::as_str),
        }
    }

    /// Grouping key for deduplication: the gecko `strict_min_version` when it
    /// is a string, [`DEFAULT_MIN_VERSION_KEY`] otherwise.
    pub fn min_version_key(&self) -> &str {
        match self {
            HistoryEntry::Release(entry) => entry.min_version_key(),
            HistoryEntry::Unrecognized(value) => value
                .pointer("/applications/gecko/strict_min_version")
                .and_then(Value::as_str)
                .unwrap_or(DEFAULT_MIN_VERSION_KEY),
        }
    }
}

impl From<UpdateEntry> for HistoryEntry {
    fn from(entry: UpdateEntry) -> Self {
        HistoryEntry::Release(entry)
    }
}

impl UpdateEntry {
    /// Build the entry announcing `version` for a Firefox release asset.
    pub fn for_release(asset: &ReleaseAsset, version: &str) -> Self {
        let applications = asset.min_version().map(|min_version| Applications {
            gecko: Some(GeckoApplication {
                strict_min_version: Some(min_version.to_string()),
                extra: JsonMap::new(),
            }),
            extra: JsonMap::new(),
        });

        Self {
            version: version.to_string(),
            update_link: asset.url.clone(),
            update_hash: Some(format!("sha256:{}", asset.hash)),
            applications,
            extra: JsonMap::new(),
        }
    }

    pub fn min_version_key(&self) -> &str {
        self.applications
            .as_ref()
            .and_then(|apps| apps.gecko.as_ref())
            .and_then(|gecko| gecko.strict_min_version.as_deref())
            .unwrap_or(DEFAULT_MIN_VERSION_KEY)
    }
}

fn deserialize_lenient_object<'de, D>(deserializer: D) -> Result<JsonMap, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(JsonMap::new()),
        other => {
            warn!("ignoring non-object `addons` value: {}", other);
            Ok(JsonMap::new())
        }
    }
}

fn deserialize_lenient_updates<'de, D>(deserializer: D) -> Result<Option<Vec<HistoryEntry>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(serde::de::Error::custom))
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        other => {
            warn!("ignoring non-array `updates` value: {}", other);
            Ok(None)
        }
    }
}
