//! Opening-hours normalization: raw OSM `opening_hours` text to display lines.
//!
//! This module is intentionally separate from place loading and rendering.
//! It owns:
//! - Day type (calendar days + the Public Holiday pseudo-day)
//! - DayHours display entry
//! - the normalization pipeline and run-length merging

pub mod day;
pub mod entry;
pub mod merge;
pub mod normalize;

pub use day::{Day, WEEK};
pub use entry::DayHours;
pub use normalize::normalize_opening_hours;
