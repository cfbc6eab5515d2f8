//! Report types.

use chrono::TimeDelta;
use serde::{Serialize, Serializer};

use super::duration::format_elapsed;

/// Ordering of the ranked report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Fastest first (default)
    #[default]
    Asc,
    /// Slowest first
    Desc,
}

/// One driver's line in the report: roster data joined with the elapsed time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantResult {
    /// Driver code (e.g. "SVF")
    pub code: String,
    /// Full name from the roster
    pub full_name: String,
    /// Team from the roster
    pub team: String,
    /// Elapsed time between the start and end log entries
    #[serde(serialize_with = "serialize_elapsed")]
    pub elapsed: TimeDelta,
}

impl ParticipantResult {
    /// Rendered elapsed time (`H:MM:SS.ffffff`), also used as the ranking key.
    pub fn elapsed_text(&self) -> String {
        format_elapsed(self.elapsed)
    }
}

fn serialize_elapsed<S: Serializer>(elapsed: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_elapsed(*elapsed))
}
