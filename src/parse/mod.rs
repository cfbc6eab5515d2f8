//! Input file parsing.
//!
//! This module turns the raw text inputs of a race into records:
//! - Start/end timing logs into `TimingRecord`s
//! - The roster (abbreviations file) into `RosterEntry`s
//!
//! Parsing is best-effort pattern matching: lines that don't match are skipped
//! and only counted for debug logging.

mod timing;
mod roster;

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error_handling::ReportError;

// Re-export public API
pub use timing::{parse_log, read_log, TimingRecord, TIMESTAMP_FORMAT};
pub use roster::{parse_roster, read_roster, RosterEntry};

/// Helper function to safely compile a regex pattern, panicking with a detailed error message
/// if compilation fails. Used for static regex patterns that are compile-time constants.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

/// Reads a whole input file, mapping failures to `ReportError::Io` with the path attached.
fn read_input(path: &Path) -> Result<String, ReportError> {
    fs::read_to_string(path).map_err(|e| ReportError::io(path, e))
}
