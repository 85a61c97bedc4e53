//! Tests for schedule parsing and expansion.

use catalog_model::{AtomicSlot, CanonicalSchedule, PERIOD_SCALE, Period, Schedule, Weekday};
use catalog_transform::schedule::expand_entry;
use catalog_transform::{expand_canonical, expand_schedule, parse_schedule};
use proptest::prelude::*;

fn slot(day: Weekday, period: &str, location: &str) -> AtomicSlot {
    AtomicSlot::new(day, Period::parse(period).unwrap(), location)
}

#[test]
fn parse_passes_through_empty_and_annotations() {
    for raw in ["", "◎", "◎密集課程，詳見課程大綱", "◎ 一 1 A101"] {
        assert_eq!(parse_schedule(raw), Schedule::Unparsed(raw.to_string()));
    }
}

#[test]
fn parse_two_segments() {
    let schedule = parse_schedule("一 1-3 A101,二 5 B202");
    let expected: CanonicalSchedule = [("一 1-3", "A101"), ("二 5", "B202")]
        .into_iter()
        .collect();
    assert_eq!(schedule, Schedule::Parsed(expected));
}

#[test]
fn expand_numeric_range() {
    let schedule: CanonicalSchedule = [("一 1-3", "A101")].into_iter().collect();
    assert_eq!(
        expand_schedule(&Schedule::Parsed(schedule)),
        vec![
            slot(Weekday::Monday, "1", "A101"),
            slot(Weekday::Monday, "2", "A101"),
            slot(Weekday::Monday, "3", "A101"),
        ]
    );
}

#[test]
fn expand_crosses_into_lettered_periods() {
    let schedule: CanonicalSchedule = [("一 9-A", "C303")].into_iter().collect();
    let slots = expand_schedule(&Schedule::Parsed(schedule));
    let periods: Vec<&str> = slots.iter().map(|s| s.period.as_str()).collect();
    assert_eq!(periods, vec!["9", "10", "A"]);
}

#[test]
fn expand_keeps_schedule_order_without_resorting() {
    let schedule = parse_schedule("五 3 E1,一 1 M1,五 1-2 E2");
    let slots = expand_schedule(&schedule);
    assert_eq!(
        slots,
        vec![
            slot(Weekday::Friday, "3", "E1"),
            slot(Weekday::Monday, "1", "M1"),
            slot(Weekday::Friday, "1", "E2"),
            slot(Weekday::Friday, "2", "E2"),
        ]
    );
}

#[test]
fn expand_skips_bad_entries_without_failing() {
    let schedule = parse_schedule("一 1 A,日 2 B,二 99 C,三 D-A D,四 10 E");
    let expansion = match &schedule {
        Schedule::Parsed(parsed) => expand_canonical(parsed),
        Schedule::Unparsed(_) => panic!("expected a parsed schedule"),
    };
    assert_eq!(expansion.dropped_entries, 3);
    assert_eq!(
        expansion.slots,
        vec![
            slot(Weekday::Monday, "1", "A"),
            slot(Weekday::Thursday, "10", "E"),
        ]
    );
}

#[test]
fn expand_unparsed_is_empty() {
    assert!(expand_schedule(&parse_schedule("◎請洽授課教師")).is_empty());
    assert!(expand_schedule(&parse_schedule("")).is_empty());
}

fn segment() -> impl Strategy<Value = (usize, usize, usize, String)> {
    (0usize..6, 0usize..15, 0usize..15, "[A-Z][0-9]{3}")
}

fn key(day: usize, start: usize, end: usize) -> String {
    format!(
        "{} {}-{}",
        Weekday::ALL[day].symbol(),
        PERIOD_SCALE[start],
        PERIOD_SCALE[end]
    )
}

proptest! {
    #[test]
    fn range_expands_to_every_period((day, start, end, location) in segment()) {
        let schedule: CanonicalSchedule = [(key(day, start, end), location.clone())]
            .into_iter()
            .collect();
        let slots = expand_schedule(&Schedule::Parsed(schedule));

        let expected = if end >= start { end - start + 1 } else { 0 };
        prop_assert_eq!(slots.len(), expected);
        for (offset, slot) in slots.iter().enumerate() {
            prop_assert_eq!(slot.day, Weekday::ALL[day]);
            prop_assert_eq!(slot.period.index(), start + offset);
            prop_assert_eq!(&slot.location, &location);
        }
    }

    #[test]
    fn slots_carry_their_entry_location(segments in prop::collection::vec(segment(), 1..6)) {
        let raw = segments
            .iter()
            .map(|(day, start, end, location)| format!("{} {location}", key(*day, *start, *end)))
            .collect::<Vec<_>>()
            .join(",");
        let schedule = parse_schedule(&raw);
        let parsed = schedule.as_parsed().expect("structured input parses");

        let mut concatenated = Vec::new();
        for (entry_key, location) in parsed.iter() {
            let slots = expand_entry(entry_key, location).unwrap_or_default();
            prop_assert!(slots.iter().all(|slot| slot.location == location));
            concatenated.extend(slots);
        }
        prop_assert_eq!(expand_schedule(&schedule), concatenated);
    }
}
