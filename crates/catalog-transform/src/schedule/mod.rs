//! Schedule parsing and slot expansion.

pub mod expand;
pub mod parse;

pub use expand::{
    Expansion, KeyError, KeyRange, expand_canonical, expand_entry, expand_schedule, resolve_key,
};
pub use parse::{parse_schedule, parse_schedule_with_marker};
