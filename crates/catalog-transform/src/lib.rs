//! Course catalog transformation.
//!
//! This crate turns source rows into compact front-end records:
//!
//! - **schedule**: `time_inf` parsing into a canonical day/period -> location
//!   mapping and expansion into atomic timetable slots
//! - **normalize**: short keys, derived fields and the falsy filter
//! - **text**: course-name derivations (bare name, credit programs)
//! - **numeric**: credit parsing
//! - **pipeline**: batch normalization with run counts

pub mod normalize;
pub mod numeric;
pub mod pipeline;
pub mod schedule;
pub mod text;

pub use normalize::{
    RecordStats, derive_course_id, normalize_record, normalize_record_with_stats,
};
pub use numeric::parse_credit;
pub use pipeline::{NormalizeResult, NormalizeSummary, normalize_records};
pub use schedule::{
    Expansion, KeyError, expand_canonical, expand_schedule, parse_schedule,
    parse_schedule_with_marker,
};
pub use text::{credit_programs, strip_line_break};
