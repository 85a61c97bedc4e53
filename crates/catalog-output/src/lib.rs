//! Course catalog output.
//!
//! - **JSON**: the compact catalog document, as a list or keyed by course id
//! - **Last update**: the per-term `last_update.json` sidecar the front end polls

mod common;
mod json;
mod last_update;

pub use common::{catalog_path, ensure_output_dir, ensure_parent_dir};
pub use json::{CatalogDocument, catalog_to_string, write_catalog_file, write_catalog_json};
pub use last_update::{LAST_UPDATE_FILE, LastUpdate, write_last_update};
