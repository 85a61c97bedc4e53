//! Shared filesystem helpers for writers.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    Ok(())
}

/// Ensure an output subdirectory exists and return its path.
pub fn ensure_output_dir(base_dir: &Path, name: &str) -> Result<PathBuf> {
    let dir = base_dir.join(name);
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// `<output_dir>/<term>.json`.
pub fn catalog_path(output_dir: &Path, term: &str) -> PathBuf {
    output_dir.join(format!("{term}.json"))
}
