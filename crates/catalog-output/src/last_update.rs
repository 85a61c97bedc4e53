//! Per-term `last_update.json` sidecar.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::common::ensure_output_dir;

pub const LAST_UPDATE_FILE: &str = "last_update.json";

/// Contents of the sidecar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastUpdate {
    pub last_update: String,
}

impl LastUpdate {
    pub fn at(timestamp: DateTime<Utc>) -> Self {
        Self {
            last_update: timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Write `<output_dir>/<term>/last_update.json` and return its path.
pub fn write_last_update(
    output_dir: &Path,
    term: &str,
    timestamp: DateTime<Utc>,
) -> Result<PathBuf> {
    let term_dir = ensure_output_dir(output_dir, term)?;
    let path = term_dir.join(LAST_UPDATE_FILE);
    let json = serde_json::to_string(&LastUpdate::at(timestamp)).context("serialize last update")?;
    fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_is_rfc3339_utc() {
        let timestamp = Utc.with_ymd_and_hms(2024, 2, 1, 8, 30, 0).unwrap();
        assert_eq!(LastUpdate::at(timestamp).last_update, "2024-02-01T08:30:00Z");
    }
}
