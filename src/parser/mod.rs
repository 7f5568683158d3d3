//! Parsing modules for release assets and update manifests

pub mod assets;
pub mod manifest;

pub use assets::parse_assets;
pub use manifest::{parse_update_manifest, parse_update_manifest_from_file, render_update_manifest};
