//! Term file reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use catalog_model::RawRecord;
use csv::ReaderBuilder;
use tracing::{debug, warn};

use super::header::{TableHeaders, normalize_header};
use crate::error::{IngestError, Result};
use crate::options::IngestOptions;

/// Rows of one term file keyed by header column.
#[derive(Debug, Clone, Default)]
pub struct CourseTable {
    pub headers: TableHeaders,
    pub records: Vec<RawRecord>,
    /// Rows whose field count differed from the header.
    pub ragged_rows: usize,
}

impl CourseTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Reads a delimited term file with a single header row.
pub fn read_course_table(path: &Path, options: &IngestOptions) -> Result<CourseTable> {
    let file = File::open(path).map_err(|e| IngestError::open(path.to_path_buf(), e))?;
    read_course_table_from(file, path, options)
}

/// Reads term data from any reader. `source` names the input in errors.
///
/// Values are kept verbatim apart from the NA mapping. Short rows leave
/// trailing columns absent; fields beyond the header are ignored.
pub fn read_course_table_from<R: Read>(
    input: R,
    source: &Path,
    options: &IngestOptions,
) -> Result<CourseTable> {
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let header_record = reader
        .headers()
        .map_err(|e| parse_error(source, &e))?
        .clone();
    if header_record.is_empty() {
        return Err(IngestError::EmptyFile {
            path: source.to_path_buf(),
        });
    }
    let headers = TableHeaders::new(header_record.iter().map(normalize_header).collect());
    if headers.columns.iter().all(String::is_empty) {
        return Err(IngestError::NoHeaderDetected {
            path: source.to_path_buf(),
        });
    }

    let missing = headers.missing_expected();
    if !missing.is_empty() {
        warn!(path = %source.display(), ?missing, "term file lacks expected columns");
    }
    let unmapped = headers.unmapped();
    if !unmapped.is_empty() {
        debug!(path = %source.display(), ?unmapped, "columns without an output key");
    }

    let mut table = CourseTable {
        headers,
        ..CourseTable::default()
    };
    for result in reader.records() {
        let record = result.map_err(|e| parse_error(source, &e))?;
        if record.len() != table.headers.len() {
            table.ragged_rows += 1;
            debug!(
                line = record.position().map(csv::Position::line),
                fields = record.len(),
                columns = table.headers.len(),
                "ragged row"
            );
        }

        let row: RawRecord = table
            .headers
            .columns
            .iter()
            .zip(record.iter())
            .filter(|(column, _)| !column.is_empty())
            .map(|(column, value)| (column.as_str(), options.cell(value)))
            .collect();
        table.records.push(row);
    }

    if table.ragged_rows > 0 {
        warn!(
            path = %source.display(),
            ragged_rows = table.ragged_rows,
            "rows with a field count different from the header"
        );
    }
    Ok(table)
}

fn parse_error(source: &Path, error: &csv::Error) -> IngestError {
    IngestError::Parse {
        path: source.to_path_buf(),
        message: error.to_string(),
    }
}
