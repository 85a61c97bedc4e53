//! Batch normalization over a sequence of rows.

use std::time::Instant;

use catalog_model::{NormalizeOptions, NormalizedCourse, RawRecord};
use tracing::{debug_span, info};

use crate::normalize::{RecordStats, normalize_record_with_stats};

/// Counts accumulated over one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeSummary {
    pub records: usize,
    pub parsed_schedules: usize,
    pub unparsed_schedules: usize,
    pub slots: usize,
    pub dropped_entries: usize,
}

impl NormalizeSummary {
    pub fn record(&mut self, stats: RecordStats) {
        self.records += 1;
        if stats.schedule_parsed {
            self.parsed_schedules += 1;
        } else {
            self.unparsed_schedules += 1;
        }
        self.slots += stats.slots;
        self.dropped_entries += stats.dropped_entries;
    }
}

/// Output of [`normalize_records`].
#[derive(Debug, Clone, Default)]
pub struct NormalizeResult {
    pub courses: Vec<NormalizedCourse>,
    pub summary: NormalizeSummary,
}

/// Normalizes every row in order. Rows are independent of one another.
pub fn normalize_records<'a, I>(rows: I, options: &NormalizeOptions) -> NormalizeResult
where
    I: IntoIterator<Item = &'a RawRecord>,
{
    let start = Instant::now();
    let mut result = NormalizeResult::default();
    for (index, row) in rows.into_iter().enumerate() {
        let span = debug_span!("row", index);
        let _guard = span.enter();
        let (course, stats) = normalize_record_with_stats(row, options);
        result.summary.record(stats);
        result.courses.push(course);
    }
    let summary = &result.summary;
    info!(
        records = summary.records,
        parsed_schedules = summary.parsed_schedules,
        unparsed_schedules = summary.unparsed_schedules,
        slots = summary.slots,
        dropped_entries = summary.dropped_entries,
        duration_ms = start.elapsed().as_millis(),
        "normalize complete"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_rows() {
        let rows: Vec<RawRecord> = vec![
            [("time_inf", "一 1-3 A,二 E B")].into_iter().collect(),
            [("time_inf", "◎另洽")].into_iter().collect(),
            RawRecord::new(),
        ];
        let result = normalize_records(&rows, &NormalizeOptions::default());

        assert_eq!(result.courses.len(), 3);
        assert_eq!(
            result.summary,
            NormalizeSummary {
                records: 3,
                parsed_schedules: 1,
                unparsed_schedules: 2,
                slots: 3,
                dropped_entries: 1,
            }
        );
    }
}
