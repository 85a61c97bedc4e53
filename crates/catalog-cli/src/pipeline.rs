//! Conversion stages: ingest, normalize, output.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::{info, info_span};

use catalog_ingest::{CourseTable, IngestOptions, read_course_table};
use catalog_model::{NormalizeOptions, NormalizedCourse, OutputContainer};
use catalog_output::{CatalogDocument, write_catalog_file, write_last_update};
use catalog_transform::{NormalizeResult, normalize_records};

use crate::types::TermSummary;

/// Settings shared by every term in a run.
#[derive(Debug, Clone, Default)]
pub struct ConvertConfig {
    pub ingest: IngestOptions,
    pub normalize: NormalizeOptions,
    pub container: OutputContainer,
}

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Read one term file.
pub fn ingest(input: &Path, options: &IngestOptions) -> Result<CourseTable> {
    let span = info_span!("ingest", path = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let table = read_course_table(input, options)
        .with_context(|| format!("read {}", input.display()))?;
    info!(
        rows = table.len(),
        columns = table.headers.len(),
        ragged_rows = table.ragged_rows,
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(table)
}

// ============================================================================
// Stage 2: Normalize
// ============================================================================

pub fn normalize(table: &CourseTable, options: &NormalizeOptions) -> NormalizeResult {
    info_span!("normalize").in_scope(|| normalize_records(&table.records, options))
}

// ============================================================================
// Stage 3: Output
// ============================================================================

/// Write the catalog document and return how many records it holds.
pub fn output(
    path: &Path,
    courses: &[NormalizedCourse],
    container: OutputContainer,
) -> Result<usize> {
    let span = info_span!("output", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    write_catalog_file(path, courses, container)?;
    let written = courses.len() - CatalogDocument::new(courses, container).duplicate_ids();
    info!(
        records = written,
        duration_ms = start.elapsed().as_millis(),
        "output complete"
    );
    Ok(written)
}

/// Convert one term file to its JSON document.
pub fn convert_term(
    term: &str,
    input: &Path,
    output_path: &Path,
    config: &ConvertConfig,
) -> Result<TermSummary> {
    let span = info_span!("term", term = %term);
    let _guard = span.enter();

    let table = ingest(input, &config.ingest)?;
    let normalized = normalize(&table, &config.normalize);
    let written = output(output_path, &normalized.courses, config.container)?;

    Ok(TermSummary {
        term: term.to_string(),
        rows: table.len(),
        ragged_rows: table.ragged_rows,
        records: written,
        normalize: normalized.summary,
        output: output_path.to_path_buf(),
        last_update: None,
    })
}

/// Convert one term and write its `last_update.json` next to the output.
pub fn convert_term_with_last_update(
    term: &str,
    input: &Path,
    output_dir: &Path,
    config: &ConvertConfig,
    timestamp: DateTime<Utc>,
) -> Result<TermSummary> {
    let output_path = catalog_output::catalog_path(output_dir, term);
    let mut summary = convert_term(term, input, &output_path, config)?;
    let sidecar = write_last_update(output_dir, term, timestamp)
        .with_context(|| format!("last update for term {term}"))?;
    summary.last_update = Some(sidecar);
    Ok(summary)
}

/// Default batch output directory for a source directory.
pub fn default_output_dir(source_dir: &Path) -> PathBuf {
    source_dir.join("output")
}
