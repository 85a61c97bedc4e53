//! Schedule string parsing.

use catalog_model::{ANNOTATION_MARKER, CanonicalSchedule, Schedule};

/// Parses a raw `time_inf` value using the default annotation marker.
pub fn parse_schedule(raw: &str) -> Schedule {
    parse_schedule_with_marker(raw, ANNOTATION_MARKER)
}

/// Parses a raw `time_inf` value into a canonical schedule.
///
/// Empty input and input starting with `marker` come back as
/// [`Schedule::Unparsed`] unchanged. Otherwise each comma-separated segment
/// contributes `"<day> <period>"` -> location; segments with fewer than two
/// tokens are discarded and repeated keys keep the last location.
pub fn parse_schedule_with_marker(raw: &str, marker: char) -> Schedule {
    if raw.is_empty() || raw.starts_with(marker) {
        return Schedule::Unparsed(raw.to_string());
    }

    let mut schedule = CanonicalSchedule::new();
    for segment in raw.split(',') {
        let tokens: Vec<&str> = segment.split_whitespace().collect();
        let [day, period, location @ ..] = tokens.as_slice() else {
            continue;
        };
        schedule.insert(format!("{day} {period}"), location.join(" "));
    }
    Schedule::Parsed(schedule)
}
