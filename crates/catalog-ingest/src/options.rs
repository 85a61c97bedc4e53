//! Ingest configuration.

use serde::{Deserialize, Serialize};

/// Cell values treated as missing, as pandas does when reading tables.
pub const NA_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Options for reading a term file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestOptions {
    /// Field delimiter byte.
    pub delimiter: u8,

    /// Read [`NA_TOKENS`] cells as empty.
    pub na_as_empty: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            na_as_empty: true,
        }
    }
}

impl IngestOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_na_as_empty(mut self, na_as_empty: bool) -> Self {
        self.na_as_empty = na_as_empty;
        self
    }

    /// Applies the NA mapping to one cell.
    pub fn cell<'a>(&self, value: &'a str) -> &'a str {
        if self.na_as_empty && is_na_token(value) {
            ""
        } else {
            value
        }
    }
}

pub fn is_na_token(value: &str) -> bool {
    NA_TOKENS.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_tab_with_na() {
        let options = IngestOptions::default();
        assert_eq!(options.delimiter, b'\t');
        assert!(options.na_as_empty);
    }

    #[test]
    fn test_cell_mapping() {
        let options = IngestOptions::default();
        assert_eq!(options.cell("NA"), "");
        assert_eq!(options.cell("nan"), "");
        assert_eq!(options.cell("NAB"), "NAB");
        assert_eq!(options.cell(" NA"), " NA");

        let keep = options.with_na_as_empty(false);
        assert_eq!(keep.cell("NA"), "NA");
    }
}
