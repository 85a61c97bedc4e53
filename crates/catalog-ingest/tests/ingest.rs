//! Reading term files from disk.

use std::path::Path;

use catalog_ingest::{IngestError, IngestOptions, list_term_files, read_course_table};
use tempfile::TempDir;

const TERM_TSV: &str = "\u{feff}serial_no\tcourse_code\tcourse_group\tchn_name\tcredit\ttime_inf\n\
1234\tMA101\t01\t微積分</br>extra\t3.0\t一 1-2 教室A\n\
\tCS101\t01\t程式設計\tNaN\t◎密集課程\n";

#[test]
fn reads_term_file_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("1132.tsv");
    std::fs::write(&path, TERM_TSV).unwrap();

    let table = read_course_table(&path, &IngestOptions::default()).unwrap();
    assert_eq!(table.len(), 2);
    assert!(table.headers.missing_expected().is_empty());

    let first = &table.records[0];
    assert_eq!(first.get("serial_no"), "1234");
    assert_eq!(first.get("chn_name"), "微積分</br>extra");
    assert_eq!(first.get("time_inf"), "一 1-2 教室A");

    let second = &table.records[1];
    assert_eq!(second.get("serial_no"), "");
    assert_eq!(second.get("credit"), "");
    assert_eq!(second.get("time_inf"), "◎密集課程");
}

#[test]
fn missing_file_is_reported() {
    let result = read_course_table(
        Path::new("/nonexistent/1132.tsv"),
        &IngestOptions::default(),
    );
    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}

#[test]
fn discovers_then_reads_each_term() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("1132.tsv"), TERM_TSV).unwrap();
    std::fs::write(dir.path().join("1131.tsv"), "serial_no\n0001\n").unwrap();

    let terms = list_term_files(dir.path()).unwrap();
    let rows: Vec<(String, usize)> = terms
        .iter()
        .map(|term| {
            let table = read_course_table(&term.path, &IngestOptions::default()).unwrap();
            (term.term.clone(), table.len())
        })
        .collect();
    assert_eq!(
        rows,
        vec![("1131".to_string(), 1), ("1132".to_string(), 2)]
    );
}
