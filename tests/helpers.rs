// Shared test helpers for writing race input files.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

pub const MONACO_ROSTER: &str = "\
SVF_Sebastian Vettel_FERRARI
DRR_Daniel Ricciardo_RED BULL RACING TAG HEUER
";

pub const MONACO_START: &str = "\
SVF2018-05-24_12:02:58.917
DRR2018-05-24_12:14:12.054
";

pub const MONACO_END: &str = "\
SVF2018-05-24_12:04:03.332
DRR2018-05-24_12:11:24.067
";

/// Race input files written into a temporary directory.
///
/// The directory is removed when this value is dropped.
pub struct RaceFiles {
    pub dir: TempDir,
    pub roster: PathBuf,
    pub start: PathBuf,
    pub end: PathBuf,
}

impl RaceFiles {
    /// The `--file` argument naming the three files.
    #[allow(dead_code)] // Used by other test files
    pub fn file_arg(&self) -> String {
        format!(
            "{} {} {}",
            self.roster.display(),
            self.start.display(),
            self.end.display()
        )
    }
}

/// Writes roster, start and end log contents to a fresh temporary directory.
pub fn write_race_files(roster: &str, start: &str, end: &str) -> RaceFiles {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let roster_path = dir.path().join("abbreviations.txt");
    let start_path = dir.path().join("start.log");
    let end_path = dir.path().join("end.log");
    fs::write(&roster_path, roster).expect("Failed to write roster");
    fs::write(&start_path, start).expect("Failed to write start log");
    fs::write(&end_path, end).expect("Failed to write end log");
    RaceFiles {
        dir,
        roster: roster_path,
        start: start_path,
        end: end_path,
    }
}

/// Writes the two-driver Monaco fixture (Vettel and Ricciardo).
#[allow(dead_code)] // Used by other test files
pub fn write_monaco_files() -> RaceFiles {
    write_race_files(MONACO_ROSTER, MONACO_START, MONACO_END)
}
