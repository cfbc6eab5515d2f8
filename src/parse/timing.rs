//! Start/end timing log parsing.
//!
//! A log line starts with a driver's alphabetic code and carries a
//! `HH:MM:SS.mmm` time of day somewhere after it, e.g.
//! `SVF2018-05-24_12:02:58.917`. Anything in between or after is ignored.

use std::path::Path;
use std::sync::LazyLock;

use chrono::NaiveTime;
use log::debug;
use regex::Regex;

use super::{compile_regex_unsafe, read_input};
use crate::error_handling::ReportError;

/// `chrono` format of a log timestamp (`HH:MM:SS.mmm`).
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";

/// A code with the time of day it was logged at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingRecord {
    /// Driver code (e.g. "SVF")
    pub code: String,
    /// Time of day, millisecond precision, no date
    pub timestamp: NaiveTime,
}

// The gap is greedy, so the last timestamp on the line wins.
static LOG_LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(
        r"^(?P<code>[A-Za-z]+).*(?P<time>\d{2}:\d{2}:\d{2}\.\d{3})",
        "LOG_LINE_PATTERN",
    )
});

/// Parses a single log line, returning `None` if it doesn't match.
///
/// Lines whose timestamp has the right shape but is not a valid time of day
/// (e.g. `25:00:00.000`) are rejected too.
fn parse_log_line(line: &str) -> Option<TimingRecord> {
    let caps = LOG_LINE_PATTERN.captures(line)?;
    let code = caps.name("code")?.as_str();
    let time = caps.name("time")?.as_str();
    let timestamp = NaiveTime::parse_from_str(time, TIMESTAMP_FORMAT).ok()?;
    Some(TimingRecord {
        code: code.to_string(),
        timestamp,
    })
}

/// Parses timing log lines into records, skipping lines that don't match.
pub fn parse_log<I, S>(lines: I) -> Vec<TimingRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records = Vec::new();
    let mut skipped = 0usize;
    for line in lines {
        match parse_log_line(line.as_ref()) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        debug!("Skipped {} log line(s) without a code and timestamp", skipped);
    }
    records
}

/// Reads and parses a timing log file.
///
/// # Errors
///
/// Returns `ReportError::Io` if the file cannot be read.
pub fn read_log(path: &Path) -> Result<Vec<TimingRecord>, ReportError> {
    let content = read_input(path)?;
    let records = parse_log(content.lines());
    debug!("Parsed {} timing record(s) from {}", records.len(), path.display());
    Ok(records)
}
