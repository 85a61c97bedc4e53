//! Configuration options for catalog normalization and output.

use serde::{Deserialize, Serialize};

use crate::schedule::ANNOTATION_MARKER;

/// Ordering of the `/`-joined location list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LocationOrder {
    /// Order of first appearance in the schedule.
    #[default]
    FirstSeen,
    /// Lexicographic order.
    Sorted,
}

/// Shape of the emitted JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputContainer {
    /// Array of records, each carrying its identifier under `id`.
    #[default]
    List,
    /// Object keyed by identifier.
    Map,
}

/// Options controlling record normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeOptions {
    /// Schedule strings starting with this character are passed through.
    pub annotation_marker: char,

    /// Joins course code and group when the serial number is unusable.
    pub id_separator: String,

    /// Ordering of distinct locations in `lc`.
    pub location_order: LocationOrder,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            annotation_marker: ANNOTATION_MARKER,
            id_separator: "-".to_string(),
            location_order: LocationOrder::FirstSeen,
        }
    }
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_annotation_marker(mut self, marker: char) -> Self {
        self.annotation_marker = marker;
        self
    }

    #[must_use]
    pub fn with_id_separator(mut self, separator: impl Into<String>) -> Self {
        self.id_separator = separator.into();
        self
    }

    #[must_use]
    pub fn with_location_order(mut self, order: LocationOrder) -> Self {
        self.location_order = order;
        self
    }
}
