//! Splices a new release into an addon's update history.
//!
//! The newest entry is always first. After a merge there is at most one entry
//! per `strict_min_version` key (entries without one share the `"default"`
//! key). When two entries share a key the one closer to the front wins, which
//! is always the newly inserted release.

use crate::models::{HistoryEntry, UpdateEntry, UpdateManifest};
use anyhow::{Context, Result};
use log::debug;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub enum MergeOutcome {
    /// The addon had no usable history; it now holds only the new entry.
    Created,
    /// The entry was prepended; `replaced` holds the entries it displaced.
    Prepended { replaced: Vec<HistoryEntry> },
}

pub fn merge_update(
    manifest: &mut UpdateManifest,
    addon_id: &str,
    entry: UpdateEntry,
) -> Result<MergeOutcome> {
    let mut addon = manifest.addon(addon_id);

    let outcome = match addon.updates.as_mut() {
        None => {
            addon.updates = Some(vec![entry.into()]);
            MergeOutcome::Created
        }
        Some(updates) => {
            updates.insert(0, entry.into());
            let replaced = dedupe_by_min_version(updates);
            for old in &replaced {
                debug!(
                    "{}: dropping {} (min version {})",
                    addon_id,
                    old.version().unwrap_or("<no version>"),
                    old.min_version_key()
                );
            }
            MergeOutcome::Prepended { replaced }
        }
    };

    manifest
        .set_addon(addon_id, addon)
        .with_context(|| format!("Failed to store update history for {}", addon_id))?;

    Ok(outcome)
}

/// Keep the first entry for each min-version key, preserving order.
/// Returns the removed entries.
pub fn dedupe_by_min_version(updates: &mut Vec<HistoryEntry>) -> Vec<HistoryEntry> {
    let mut seen = HashSet::new();
    let mut removed = Vec::new();

    let mut kept = Vec::with_capacity(updates.len());
    for entry in updates.drain(..) {
        if seen.insert(entry.min_version_key().to_string()) {
            kept.push(entry);
        } else {
            removed.push(entry);
        }
    }
    *updates = kept;

    removed
}
