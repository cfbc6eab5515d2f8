//! Roster (abbreviations file) parsing.
//!
//! Each line maps a driver code to a full name and a team:
//! `SVF_Sebastian Vettel_FERRARI`.

use std::path::Path;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use super::{compile_regex_unsafe, read_input};
use crate::error_handling::ReportError;

/// A driver's code, full name and team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    /// Driver code (e.g. "SVF")
    pub code: String,
    /// Full name (e.g. "Sebastian Vettel")
    pub full_name: String,
    /// Team name (e.g. "FERRARI")
    pub team: String,
}

// Code stops at the first underscore, name at the last one.
static ROSTER_LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(
        r"^(?P<code>.*?)_(?P<full_name>.*)_(?P<team>.*)$",
        "ROSTER_LINE_PATTERN",
    )
});

fn parse_roster_line(line: &str) -> Option<RosterEntry> {
    let caps = ROSTER_LINE_PATTERN.captures(line)?;
    Some(RosterEntry {
        code: caps.name("code")?.as_str().to_string(),
        full_name: caps.name("full_name")?.as_str().to_string(),
        team: caps.name("team")?.as_str().to_string(),
    })
}

/// Parses roster lines into entries, skipping lines with fewer than three fields.
pub fn parse_roster<I, S>(lines: I) -> Vec<RosterEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut entries = Vec::new();
    let mut skipped = 0usize;
    for line in lines {
        match parse_roster_line(line.as_ref()) {
            Some(entry) => entries.push(entry),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        debug!("Skipped {} roster line(s) without three fields", skipped);
    }
    entries
}

/// Reads and parses a roster file.
///
/// # Errors
///
/// Returns `ReportError::Io` if the file cannot be read.
pub fn read_roster(path: &Path) -> Result<Vec<RosterEntry>, ReportError> {
    let content = read_input(path)?;
    let entries = parse_roster(content.lines());
    debug!("Parsed {} roster entries from {}", entries.len(), path.display());
    Ok(entries)
}
