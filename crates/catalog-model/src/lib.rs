//! Course catalog data model.
//!
//! - **record**: source rows, short-key output records and identifiers
//! - **schedule**: weekdays, the period scale, canonical schedules and slots
//! - **fields**: long-to-short key table
//! - **options**: normalization and output configuration

pub mod error;
pub mod fields;
pub mod options;
pub mod record;
pub mod schedule;

pub use error::{ModelError, Result};
pub use fields::{DERIVED_KEYS, FIELD_KEYS, short_key};
pub use options::{LocationOrder, NormalizeOptions, OutputContainer};
pub use record::{CourseId, FieldValue, NormalizedCourse, OutputRecord, RawRecord};
pub use schedule::{
    ANNOTATION_MARKER, AtomicSlot, CanonicalSchedule, PERIOD_SCALE, Period, Schedule, Weekday,
};
