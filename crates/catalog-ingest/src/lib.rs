//! Course catalog ingestion.
//!
//! Loads per-term TSV exports into [`RawRecord`](catalog_model::RawRecord)s.
//!
//! # Features
//!
//! - **TSV Loading**: header-keyed rows, NA tokens read as empty, ragged rows tolerated
//! - **Term Discovery**: find `*.tsv` files in a directory, named by term
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use catalog_ingest::{IngestOptions, list_term_files, read_course_table};
//!
//! for term in list_term_files(Path::new("data"))? {
//!     let table = read_course_table(&term.path, &IngestOptions::default())?;
//!     println!("{}: {} rows", term.term, table.len());
//! }
//! ```

mod discovery;
mod error;
mod options;
mod tsv;

// === Error Types ===
pub use error::{IngestError, Result};

// === Options ===
pub use options::{IngestOptions, NA_TOKENS, is_na_token};

// === TSV Reading ===
pub use tsv::{
    CourseTable, EXPECTED_COLUMNS, TableHeaders, normalize_header, read_course_table,
    read_course_table_from,
};

// === Term Discovery ===
pub use discovery::{TermFile, list_term_files, term_name};
