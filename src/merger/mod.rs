//! Update history merging for Firefox manifests

pub mod history;

pub use history::{dedupe_by_min_version, merge_update, MergeOutcome};
