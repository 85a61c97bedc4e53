//! Error types for course catalog ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading term files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// TSV file not found.
    #[error("TSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    /// Malformed delimited data.
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// File has no header row.
    #[error("file is empty: {path}")]
    EmptyFile { path: PathBuf },

    /// Header row has no usable column names.
    #[error("could not detect header row in {path}")]
    NoHeaderDetected { path: PathBuf },
}

impl IngestError {
    /// Maps an open failure, distinguishing a missing file.
    pub(crate) fn open(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/1132.tsv"),
        };
        assert_eq!(err.to_string(), "TSV file not found: /data/1132.tsv");
    }

    #[test]
    fn test_open_maps_not_found() {
        let source = std::io::Error::from(std::io::ErrorKind::NotFound);
        let err = IngestError::open(PathBuf::from("x.tsv"), source);
        assert!(matches!(err, IngestError::FileNotFound { .. }));

        let source = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        let err = IngestError::open(PathBuf::from("x.tsv"), source);
        assert!(matches!(err, IngestError::FileRead { .. }));
    }
}
