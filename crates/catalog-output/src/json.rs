//! Compact JSON catalog documents.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use catalog_model::fields::keys;
use catalog_model::{NormalizedCourse, OutputContainer, OutputRecord};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use tracing::warn;

use crate::common::ensure_parent_dir;

/// A record prefixed with its identifier under `id`.
struct ListEntry<'a>(&'a NormalizedCourse);

impl Serialize for ListEntry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let course = self.0;
        let mut map = serializer.serialize_map(Some(course.record.len() + 1))?;
        map.serialize_entry(keys::ID, &course.id)?;
        for (key, value) in course.record.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// The emitted document, in either container shape.
pub struct CatalogDocument<'a> {
    courses: &'a [NormalizedCourse],
    container: OutputContainer,
}

impl<'a> CatalogDocument<'a> {
    pub fn new(courses: &'a [NormalizedCourse], container: OutputContainer) -> Self {
        Self { courses, container }
    }

    /// Entries of the map form. A repeated identifier keeps its first
    /// position and takes the later record.
    pub fn keyed_entries(&self) -> Vec<(&'a str, &'a OutputRecord)> {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut entries: Vec<(&str, &OutputRecord)> = Vec::with_capacity(self.courses.len());
        for course in self.courses {
            let id = course.id.as_str();
            match positions.get(id) {
                Some(&index) => entries[index].1 = &course.record,
                None => {
                    positions.insert(id, entries.len());
                    entries.push((id, &course.record));
                }
            }
        }
        entries
    }

    /// Number of records the map form loses to repeated identifiers.
    pub fn duplicate_ids(&self) -> usize {
        match self.container {
            OutputContainer::List => 0,
            OutputContainer::Map => self.courses.len() - self.keyed_entries().len(),
        }
    }
}

impl Serialize for CatalogDocument<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.container {
            OutputContainer::List => {
                let mut seq = serializer.serialize_seq(Some(self.courses.len()))?;
                for course in self.courses {
                    seq.serialize_element(&ListEntry(course))?;
                }
                seq.end()
            }
            OutputContainer::Map => {
                let entries = self.keyed_entries();
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (id, record) in entries {
                    map.serialize_entry(id, record)?;
                }
                map.end()
            }
        }
    }
}

/// Write the catalog as compact JSON. Non-ASCII text is written literally.
pub fn write_catalog_json<W: Write>(
    writer: W,
    courses: &[NormalizedCourse],
    container: OutputContainer,
) -> Result<()> {
    let document = CatalogDocument::new(courses, container);
    let duplicates = document.duplicate_ids();
    if duplicates > 0 {
        warn!(duplicates, "repeated course ids overwritten in map output");
    }
    serde_json::to_writer(writer, &document).context("serialize catalog")?;
    Ok(())
}

/// Serialize the catalog to a string.
pub fn catalog_to_string(courses: &[NormalizedCourse], container: OutputContainer) -> Result<String> {
    let mut buffer = Vec::new();
    write_catalog_json(&mut buffer, courses, container)?;
    String::from_utf8(buffer).context("catalog is not UTF-8")
}

/// Write the catalog to `path`, creating parent directories.
pub fn write_catalog_file(
    path: &Path,
    courses: &[NormalizedCourse],
    container: OutputContainer,
) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_catalog_json(&mut writer, courses, container)
        .with_context(|| format!("write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_model::CourseId;

    fn course(id: &str, name: &str) -> NormalizedCourse {
        let mut record = OutputRecord::new();
        record.set("cn", name.to_string());
        NormalizedCourse {
            id: CourseId::new(id),
            record,
        }
    }

    #[test]
    fn list_entries_carry_id_first() {
        let courses = vec![course("1234", "微積分")];
        let json = catalog_to_string(&courses, OutputContainer::List).unwrap();
        assert_eq!(json, r#"[{"id":"1234","cn":"微積分"}]"#);
    }

    #[test]
    fn map_keeps_first_position_and_last_record() {
        let courses = vec![course("A", "one"), course("B", "two"), course("A", "three")];
        let document = CatalogDocument::new(&courses, OutputContainer::Map);
        assert_eq!(document.duplicate_ids(), 1);

        let json = catalog_to_string(&courses, OutputContainer::Map).unwrap();
        assert_eq!(json, r#"{"A":{"cn":"three"},"B":{"cn":"two"}}"#);
    }

    #[test]
    fn empty_catalog() {
        assert_eq!(catalog_to_string(&[], OutputContainer::List).unwrap(), "[]");
        assert_eq!(catalog_to_string(&[], OutputContainer::Map).unwrap(), "{}");
    }
}
