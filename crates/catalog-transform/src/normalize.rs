//! Row-level normalization: short keys, derived fields and the falsy filter.

use catalog_model::fields::{columns, keys};
use catalog_model::{
    CanonicalSchedule, CourseId, FIELD_KEYS, LocationOrder, NormalizeOptions, NormalizedCourse,
    OutputRecord, RawRecord, Schedule,
};

use crate::numeric::parse_credit;
use crate::schedule::{expand_canonical, parse_schedule_with_marker};
use crate::text::{credit_programs, strip_line_break};

/// Length of a well-formed serial number, in characters.
pub const SERIAL_NO_LEN: usize = 4;

/// Schedule statistics for one normalized row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordStats {
    pub schedule_parsed: bool,
    pub slots: usize,
    pub dropped_entries: usize,
}

/// Identifier for a row: its serial number when well-formed, else
/// `<course_code><separator><course_group>`.
pub fn derive_course_id(row: &RawRecord, options: &NormalizeOptions) -> CourseId {
    let serial_no = row.get(columns::SERIAL_NO);
    if serial_no.chars().count() == SERIAL_NO_LEN {
        return CourseId::new(serial_no);
    }
    CourseId::new(format!(
        "{}{}{}",
        row.get(columns::COURSE_CODE),
        options.id_separator,
        row.get(columns::COURSE_GROUP)
    ))
}

/// Normalizes one source row into its short-key output record.
pub fn normalize_record(row: &RawRecord, options: &NormalizeOptions) -> NormalizedCourse {
    normalize_record_with_stats(row, options).0
}

/// Like [`normalize_record`], also reporting schedule statistics.
pub fn normalize_record_with_stats(
    row: &RawRecord,
    options: &NormalizeOptions,
) -> (NormalizedCourse, RecordStats) {
    let id = derive_course_id(row, options);

    let mut record = OutputRecord::new();
    for &(column, key) in FIELD_KEYS {
        record.set(key, row.get(column));
    }

    record.set(keys::CREDIT, parse_credit(row.get(columns::CREDIT)));

    let chinese_name = row.get(columns::CHN_NAME);
    record.set(keys::NAME, strip_line_break(chinese_name));
    record.set(keys::PROGRAMS, credit_programs(chinese_name));

    let schedule = parse_schedule_with_marker(row.get(columns::TIME_INF), options.annotation_marker);
    let mut stats = RecordStats::default();
    match &schedule {
        Schedule::Parsed(parsed) => {
            let expansion = expand_canonical(parsed);
            stats = RecordStats {
                schedule_parsed: true,
                slots: expansion.slots.len(),
                dropped_entries: expansion.dropped_entries,
            };
            record.set(keys::TIMES, parsed.keys().map(str::to_string).collect::<Vec<_>>());
            record.set(keys::LOCATIONS, join_locations(parsed, options.location_order));
            record.set(keys::SLOTS, expansion.slots);
            record.set(keys::TIME_LOCATIONS, join_time_locations(parsed));
        }
        Schedule::Unparsed(raw) if !raw.is_empty() => {
            record.set(keys::TIMES, vec![raw.clone()]);
        }
        Schedule::Unparsed(_) => {}
    }
    record.set(keys::TIME_INFO, schedule);

    let course = NormalizedCourse {
        id,
        record: record.without_falsy(),
    };
    (course, stats)
}

/// Distinct locations joined with `/`.
pub fn join_locations(schedule: &CanonicalSchedule, order: LocationOrder) -> String {
    let mut distinct: Vec<&str> = Vec::new();
    for location in schedule.locations() {
        if !distinct.contains(&location) {
            distinct.push(location);
        }
    }
    if order == LocationOrder::Sorted {
        distinct.sort_unstable();
    }
    distinct.join("/")
}

/// `"<key> <location>"` for every entry, joined with `/`.
pub fn join_time_locations(schedule: &CanonicalSchedule) -> String {
    schedule
        .iter()
        .map(|(key, location)| format!("{key} {location}"))
        .collect::<Vec<_>>()
        .join("/")
}
