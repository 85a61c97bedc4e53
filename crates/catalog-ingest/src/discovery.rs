//! Term file discovery.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{IngestError, Result};

/// A term export found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermFile {
    /// File stem, e.g. `1132` for `1132.tsv`.
    pub term: String,
    pub path: PathBuf,
}

/// Term name of a path: its file stem.
pub fn term_name(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|stem| stem.to_str())
}

/// Lists all TSV files in a directory.
///
/// Returns files sorted by filename.
pub fn list_term_files(dir: &Path) -> Result<Vec<TermFile>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let is_tsv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("tsv"));
        if !is_tsv {
            continue;
        }

        match term_name(&path) {
            Some(term) => files.push(TermFile {
                term: term.to_string(),
                path,
            }),
            None => warn!(path = %path.display(), "skipping term file with a non UTF-8 name"),
        }
    }

    files.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_term_files() {
        let dir = TempDir::new().unwrap();
        for name in ["1132.tsv", "1121.TSV", "notes.txt", "1131.tsv"] {
            std::fs::write(dir.path().join(name), "serial_no\n").unwrap();
        }
        std::fs::create_dir(dir.path().join("1999.tsv")).unwrap();

        let files = list_term_files(dir.path()).unwrap();
        let terms: Vec<&str> = files.iter().map(|f| f.term.as_str()).collect();
        assert_eq!(terms, vec!["1121", "1131", "1132"]);
    }

    #[test]
    fn test_list_term_files_empty_dir() {
        let dir = TempDir::new().unwrap();
        assert!(list_term_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_list_term_files_not_a_directory() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("1132.tsv");
        std::fs::write(&file_path, "data").unwrap();

        let result = list_term_files(&file_path);
        assert!(matches!(result, Err(IngestError::DirectoryNotFound { .. })));
    }

    #[test]
    fn test_term_name() {
        assert_eq!(term_name(Path::new("/data/1132.tsv")), Some("1132"));
    }
}
