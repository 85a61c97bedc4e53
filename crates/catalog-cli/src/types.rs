use std::path::PathBuf;

use catalog_transform::NormalizeSummary;

/// Outcome of converting one term file.
#[derive(Debug, Clone)]
pub struct TermSummary {
    pub term: String,
    /// Data rows read from the source file.
    pub rows: usize,
    pub ragged_rows: usize,
    /// Records in the written document.
    pub records: usize,
    pub normalize: NormalizeSummary,
    pub output: PathBuf,
    pub last_update: Option<PathBuf>,
}

/// Outcome of a `convert` or `batch` run.
#[derive(Debug, Default)]
pub struct RunResult {
    pub output_dir: Option<PathBuf>,
    pub terms: Vec<TermSummary>,
    pub errors: Vec<String>,
}

impl RunResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
