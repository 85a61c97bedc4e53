//! Input rows, output records and course identifiers.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::schedule::{AtomicSlot, CanonicalSchedule, Schedule};

/// One source row keyed by long column name.
///
/// Missing columns read as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: BTreeMap<String, String>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map_or("", String::as_str)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Value stored under a short output key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    List(Vec<String>),
    Schedule(CanonicalSchedule),
    Slots(Vec<AtomicSlot>),
}

impl FieldValue {
    /// Empty strings, empty collections and zero are falsy.
    pub fn is_falsy(&self) -> bool {
        match self {
            FieldValue::Text(value) => value.is_empty(),
            FieldValue::Integer(value) => *value == 0,
            FieldValue::List(values) => values.is_empty(),
            FieldValue::Schedule(schedule) => schedule.is_empty(),
            FieldValue::Slots(slots) => slots.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        FieldValue::List(values)
    }
}

impl From<Vec<AtomicSlot>> for FieldValue {
    fn from(slots: Vec<AtomicSlot>) -> Self {
        FieldValue::Slots(slots)
    }
}

impl From<Schedule> for FieldValue {
    fn from(schedule: Schedule) -> Self {
        match schedule {
            Schedule::Unparsed(raw) => FieldValue::Text(raw),
            Schedule::Parsed(parsed) => FieldValue::Schedule(parsed),
        }
    }
}

/// Ordered short-key record, serialized as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputRecord {
    fields: Vec<(&'static str, FieldValue)>,
}

impl OutputRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a key, replacing an existing value in place.
    pub fn set(&mut self, key: &'static str, value: impl Into<FieldValue>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(existing, _)| *existing == key)
            .map(|(_, value)| value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(key, _)| *key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.fields.iter().map(|(key, value)| (*key, value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Drops every falsy value.
    #[must_use]
    pub fn without_falsy(mut self) -> Self {
        self.fields.retain(|(_, value)| !value.is_falsy());
        self
    }
}

impl Serialize for OutputRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Identifier a course is published under.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A normalized row together with its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedCourse {
    pub id: CourseId,
    pub record: OutputRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_record_missing_reads_empty() {
        let row: RawRecord = [("serial_no", "1234")].into_iter().collect();
        assert_eq!(row.get("serial_no"), "1234");
        assert_eq!(row.get("credit"), "");
        assert!(!row.contains("credit"));
    }

    #[test]
    fn falsy_values() {
        assert!(FieldValue::from("").is_falsy());
        assert!(FieldValue::from(0_i64).is_falsy());
        assert!(FieldValue::List(vec![]).is_falsy());
        assert!(FieldValue::Schedule(CanonicalSchedule::new()).is_falsy());
        assert!(FieldValue::Slots(vec![]).is_falsy());
        assert!(!FieldValue::from(" ").is_falsy());
        assert!(!FieldValue::from(-1_i64).is_falsy());
    }

    #[test]
    fn set_replaces_in_place() {
        let mut record = OutputRecord::new();
        record.set("cr", "3.0");
        record.set("n", "Calculus");
        record.set("cr", 3_i64);
        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["cr", "n"]);
        assert_eq!(record.get("cr").and_then(FieldValue::as_integer), Some(3));
    }
}
