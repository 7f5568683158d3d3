//! Core data models for release assets and update manifests

pub mod asset;
pub mod manifest;
pub mod report;

pub use asset::*;
pub use manifest::*;
pub use report::*;
