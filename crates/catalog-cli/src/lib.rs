//! CLI library components for the course catalog converter.

pub mod logging;
pub mod pipeline;
pub mod types;
