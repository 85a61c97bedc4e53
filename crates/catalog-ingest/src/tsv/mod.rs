//! Tab-separated term file reading.

mod header;
mod reader;

pub use header::{EXPECTED_COLUMNS, TableHeaders, normalize_header};
pub use reader::{CourseTable, read_course_table, read_course_table_from};
