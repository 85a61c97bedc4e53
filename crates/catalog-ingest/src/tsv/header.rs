//! Header row handling.

use catalog_model::fields::columns;
use catalog_model::short_key;

/// Columns every term file is expected to carry.
pub const EXPECTED_COLUMNS: &[&str] = &[
    columns::SERIAL_NO,
    columns::COURSE_CODE,
    columns::COURSE_GROUP,
    columns::CHN_NAME,
    columns::CREDIT,
    columns::TIME_INF,
];

/// Column names from a term file's header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableHeaders {
    pub columns: Vec<String>,
}

impl TableHeaders {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Expected columns absent from this header.
    pub fn missing_expected(&self) -> Vec<&'static str> {
        EXPECTED_COLUMNS
            .iter()
            .copied()
            .filter(|column| !self.contains(column))
            .collect()
    }

    /// Columns with no short output key. These are read but never emitted.
    pub fn unmapped(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(String::as_str)
            .filter(|column| short_key(column).is_none())
            .collect()
    }
}

/// Strips a UTF-8 byte order mark and surrounding whitespace.
pub fn normalize_header(value: &str) -> String {
    value.trim_matches('\u{feff}').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(columns: &[&str]) -> TableHeaders {
        TableHeaders::new(columns.iter().map(|c| (*c).to_string()).collect())
    }

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("\u{feff}serial_no"), "serial_no");
        assert_eq!(normalize_header("  credit "), "credit");
    }

    #[test]
    fn test_missing_expected() {
        let h = headers(&["serial_no", "course_code", "course_group", "chn_name"]);
        assert_eq!(h.missing_expected(), vec!["credit", "time_inf"]);
    }

    #[test]
    fn test_unmapped() {
        let h = headers(&["serial_no", "course_avg", "time_inf", "note"]);
        assert_eq!(h.unmapped(), vec!["course_avg", "note"]);
        assert_eq!(h.len(), 4);
    }
}
