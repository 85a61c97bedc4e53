//! Schedule types: weekdays, the period scale, canonical schedules and slots.

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::{ModelError, Result};

/// Leading character of a free-text scheduling note.
pub const ANNOTATION_MARKER: char = '◎';

/// Ordered class periods. `A` through `D` follow `10`.
pub const PERIOD_SCALE: [&str; 15] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "A", "B", "C", "D",
];

/// Teaching day, written as a single CJK numeral in schedule strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 6] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn symbol(self) -> char {
        match self {
            Weekday::Monday => '一',
            Weekday::Tuesday => '二',
            Weekday::Wednesday => '三',
            Weekday::Thursday => '四',
            Weekday::Friday => '五',
            Weekday::Saturday => '六',
        }
    }

    pub fn from_symbol(symbol: char) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|day| day.symbol() == symbol)
            .ok_or(ModelError::UnknownWeekday(symbol))
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Serialize for Weekday {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_char(self.symbol())
    }
}

/// A single position on [`PERIOD_SCALE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period(usize);

impl Period {
    /// Looks up a token on the scale. Tokens are matched exactly.
    pub fn parse(token: &str) -> Result<Self> {
        PERIOD_SCALE
            .iter()
            .position(|candidate| *candidate == token)
            .map(Self)
            .ok_or_else(|| ModelError::UnknownPeriod(token.to_string()))
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn as_str(self) -> &'static str {
        PERIOD_SCALE[self.0]
    }

    /// Every period from `start` to `end` inclusive, in scale order.
    ///
    /// Yields nothing when `end` precedes `start`.
    pub fn range_inclusive(start: Period, end: Period) -> impl Iterator<Item = Period> {
        (start.0..=end.0).map(Period)
    }

    pub fn all() -> impl Iterator<Item = Period> {
        (0..PERIOD_SCALE.len()).map(Period)
    }
}

impl FromStr for Period {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Ordered mapping from `"<day> <period-or-range>"` to a location.
///
/// Keys iterate in first-seen order. Re-inserting a key replaces its
/// location but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalSchedule {
    entries: Vec<(String, String)>,
}

impl CanonicalSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites an entry, returning the previous location.
    pub fn insert(&mut self, key: impl Into<String>, location: impl Into<String>) -> Option<String> {
        let key = key.into();
        let location = location.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, location)),
            None => {
                self.entries.push((key, location));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, location)| location.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, location)| (key.as_str(), location.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, location)| location.as_str())
    }
}

impl<K, V> FromIterator<(K, V)> for CanonicalSchedule
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut schedule = Self::new();
        for (key, location) in iter {
            schedule.insert(key, location);
        }
        schedule
    }
}

impl Serialize for CanonicalSchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, location) in &self.entries {
            map.serialize_entry(key, location)?;
        }
        map.end()
    }
}

/// Result of parsing a schedule string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Schedule {
    /// Empty input or a free-text note, kept verbatim.
    Unparsed(String),
    Parsed(CanonicalSchedule),
}

impl Schedule {
    pub fn as_parsed(&self) -> Option<&CanonicalSchedule> {
        match self {
            Schedule::Parsed(schedule) => Some(schedule),
            Schedule::Unparsed(_) => None,
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, Schedule::Parsed(_))
    }
}

/// One (day, period, location) cell of a timetable grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AtomicSlot {
    #[serde(rename = "d")]
    pub day: Weekday,
    #[serde(rename = "p")]
    pub period: Period,
    #[serde(rename = "l")]
    pub location: String,
}

impl AtomicSlot {
    pub fn new(day: Weekday, period: Period, location: impl Into<String>) -> Self {
        Self {
            day,
            period,
            location: location.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_scale_crosses_into_letters() {
        let nine = Period::parse("9").unwrap();
        let a = Period::parse("A").unwrap();
        let tokens: Vec<&str> = Period::range_inclusive(nine, a)
            .map(Period::as_str)
            .collect();
        assert_eq!(tokens, vec!["9", "10", "A"]);
    }

    #[test]
    fn reversed_range_is_empty() {
        let three = Period::parse("3").unwrap();
        let one = Period::parse("1").unwrap();
        assert_eq!(Period::range_inclusive(three, one).count(), 0);
    }

    #[test]
    fn period_rejects_off_scale_tokens() {
        assert_eq!(
            Period::parse("11"),
            Err(ModelError::UnknownPeriod("11".to_string()))
        );
        assert!(Period::parse("E").is_err());
        assert!(Period::parse("a").is_err());
        assert!(Period::parse("01").is_err());
    }

    #[test]
    fn weekday_symbols_round_trip() {
        for day in Weekday::ALL {
            assert_eq!(Weekday::from_symbol(day.symbol()), Ok(day));
        }
        assert_eq!(Weekday::from_symbol('日'), Err(ModelError::UnknownWeekday('日')));
    }

    #[test]
    fn schedule_insert_keeps_first_position() {
        let mut schedule = CanonicalSchedule::new();
        schedule.insert("一 1", "A");
        schedule.insert("二 2", "B");
        let previous = schedule.insert("一 1", "C");

        assert_eq!(previous, Some("A".to_string()));
        let entries: Vec<(&str, &str)> = schedule.iter().collect();
        assert_eq!(entries, vec![("一 1", "C"), ("二 2", "B")]);
    }
}
