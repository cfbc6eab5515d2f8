//! Race report building.
//!
//! This module provides:
//! - Elapsed time computation from start/end timing records
//! - Ranking by rendered elapsed time
//! - The code-keyed merge with roster data
//! - Sort order and single-driver lookup over a built report

mod builder;
mod duration;
mod types;

// Re-export public API
pub use builder::{build_report, build_report_from_records, find_participant, sort_report};
pub use duration::{elapsed_between, format_elapsed};
pub use types::{ParticipantResult, SortOrder};
