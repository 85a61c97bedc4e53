//! Expansion of canonical schedules into atomic timetable slots.

use std::sync::LazyLock;

use catalog_model::{AtomicSlot, CanonicalSchedule, ModelError, Period, Schedule, Weekday};
use regex::Regex;
use thiserror::Error;
use tracing::debug;

/// Day symbol, start period and optional end period at the start of a key.
static SCHEDULE_KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([一二三四五六])\s*(\d+|A|B|C|D)(?:-(\d+|A|B|C|D))?")
        .expect("Invalid schedule key regex")
});

/// Why a schedule entry produced no slots.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("'{0}' does not start with a day and period")]
    Unrecognized(String),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("period range {start}-{end} runs backwards")]
    Reversed { start: Period, end: Period },
}

/// Day and inclusive period range named by a schedule key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyRange {
    pub day: Weekday,
    pub start: Period,
    pub end: Period,
}

impl KeyRange {
    pub fn periods(self) -> impl Iterator<Item = Period> {
        Period::range_inclusive(self.start, self.end)
    }
}

/// Slots produced from a schedule plus the count of entries that yielded none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    pub slots: Vec<AtomicSlot>,
    pub dropped_entries: usize,
}

/// Resolves a key such as `"一 9-A"` against the weekday symbols and period scale.
pub fn resolve_key(key: &str) -> Result<KeyRange, KeyError> {
    let captures = SCHEDULE_KEY_REGEX
        .captures(key)
        .ok_or_else(|| KeyError::Unrecognized(key.to_string()))?;

    let day = captures
        .get(1)
        .and_then(|m| m.as_str().chars().next())
        .ok_or_else(|| KeyError::Unrecognized(key.to_string()))?;
    let day = Weekday::from_symbol(day)?;

    let start = captures
        .get(2)
        .ok_or_else(|| KeyError::Unrecognized(key.to_string()))?;
    let start = Period::parse(start.as_str())?;
    let end = match captures.get(3) {
        Some(end) => Period::parse(end.as_str())?,
        None => start,
    };

    if end < start {
        return Err(KeyError::Reversed { start, end });
    }
    Ok(KeyRange { day, start, end })
}

/// Expands one entry into a slot per period of its range.
pub fn expand_entry(key: &str, location: &str) -> Result<Vec<AtomicSlot>, KeyError> {
    let range = resolve_key(key)?;
    Ok(range
        .periods()
        .map(|period| AtomicSlot::new(range.day, period, location))
        .collect())
}

/// Expands every entry in schedule order, skipping entries that do not resolve.
pub fn expand_canonical(schedule: &CanonicalSchedule) -> Expansion {
    let mut expansion = Expansion::default();
    for (key, location) in schedule.iter() {
        match expand_entry(key, location) {
            Ok(slots) => expansion.slots.extend(slots),
            Err(error) => {
                debug!(key, location, reason = %error, "schedule entry dropped");
                expansion.dropped_entries += 1;
            }
        }
    }
    expansion
}

/// Atomic slots for a parsed schedule; pass-through schedules yield none.
pub fn expand_schedule(schedule: &Schedule) -> Vec<AtomicSlot> {
    match schedule {
        Schedule::Parsed(parsed) => expand_canonical(parsed).slots,
        Schedule::Unparsed(_) => Vec::new(),
    }
}
