//! Manifest writers for each browser

pub mod chrome;
pub mod firefox;
pub mod materializer;

pub use chrome::{render_update_xml, write_chrome_update};
pub use firefox::{load_manifest, locate_existing_manifest, write_firefox_update};
pub use materializer::Materializer;
