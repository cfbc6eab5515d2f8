//! Configuration constants.
//!
//! Default input locations, used when no `--file` argument is given.

/// Default roster (abbreviations) file
pub const DEFAULT_ROSTER_PATH: &str = "files/abbreviations.txt";
/// Default start time log
pub const DEFAULT_START_LOG_PATH: &str = "files/start.log";
/// Default end time log
pub const DEFAULT_END_LOG_PATH: &str = "files/end.log";
