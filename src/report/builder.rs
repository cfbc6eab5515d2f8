//! Report building: joins start and end logs into elapsed times, ranks them
//! and merges in the roster.

use std::collections::HashMap;
use std::path::Path;

use chrono::TimeDelta;
use log::{debug, info};

use super::duration::{elapsed_between, format_elapsed};
use super::types::{ParticipantResult, SortOrder};
use crate::error_handling::ReportError;
use crate::parse::{read_log, read_roster, RosterEntry, TimingRecord};

/// Partially merged fields for one code.
#[derive(Debug, Default)]
struct MergedRow {
    code: String,
    elapsed: Option<TimeDelta>,
    full_name: Option<String>,
    team: Option<String>,
}

/// Code-keyed table that iterates in first-insertion order.
///
/// Updating an existing code overwrites its fields in place, so the code keeps
/// the position it was first inserted at.
#[derive(Debug, Default)]
struct MergeTable {
    index: HashMap<String, usize>,
    rows: Vec<MergedRow>,
}

impl MergeTable {
    fn entry(&mut self, code: &str) -> &mut MergedRow {
        let position = match self.index.get(code) {
            Some(&position) => position,
            None => {
                self.rows.push(MergedRow {
                    code: code.to_string(),
                    ..Default::default()
                });
                self.index.insert(code.to_string(), self.rows.len() - 1);
                self.rows.len() - 1
            }
        };
        &mut self.rows[position]
    }

    fn into_rows(self) -> Vec<MergedRow> {
        self.rows
    }
}

/// Pairs every start record with every end record of the same code.
///
/// Every matching pair is kept, so a code can appear more than once. The
/// result is sorted by rendered elapsed text (stable for equal texts).
fn ranked_durations(start: &[TimingRecord], end: &[TimingRecord]) -> Vec<(String, TimeDelta)> {
    let mut keyed: Vec<(String, String, TimeDelta)> = Vec::new();
    for start_record in start {
        for end_record in end {
            if start_record.code == end_record.code {
                let elapsed = elapsed_between(start_record.timestamp, end_record.timestamp);
                keyed.push((format_elapsed(elapsed), start_record.code.clone(), elapsed));
            }
        }
    }
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    keyed
        .into_iter()
        .map(|(_, code, elapsed)| (code, elapsed))
        .collect()
}

/// Builds the ranked report from already parsed records.
///
/// Elapsed times are written into the merge table first, in rank order, and
/// roster entries are laid over them. A code keeps the position of its first
/// (fastest) pair but shows the elapsed time of its last (slowest) one; the
/// last roster line for a code decides its name and team. Codes without both
/// an elapsed time and a roster entry are left out.
pub fn build_report_from_records(
    start: &[TimingRecord],
    end: &[TimingRecord],
    roster: &[RosterEntry],
) -> Vec<ParticipantResult> {
    let mut table = MergeTable::default();
    for (code, elapsed) in ranked_durations(start, end) {
        table.entry(&code).elapsed = Some(elapsed);
    }
    for entry in roster {
        let row = table.entry(&entry.code);
        row.full_name = Some(entry.full_name.clone());
        row.team = Some(entry.team.clone());
    }

    let rows = table.into_rows();
    let total_codes = rows.len();
    let report: Vec<ParticipantResult> = rows
        .into_iter()
        .filter_map(|row| {
            Some(ParticipantResult {
                elapsed: row.elapsed?,
                full_name: row.full_name?,
                team: row.team?,
                code: row.code,
            })
        })
        .collect();

    if report.len() < total_codes {
        debug!(
            "Dropped {} code(s) missing a start/end pair or a roster entry",
            total_codes - report.len()
        );
    }
    report
}

/// Reads the three input files and builds the ranked report, fastest first.
///
/// # Errors
///
/// Returns `ReportError::Io` if any of the files cannot be read. Malformed
/// lines and codes missing from one of the files are skipped, not reported.
pub fn build_report(
    roster_path: &Path,
    start_log_path: &Path,
    end_log_path: &Path,
) -> Result<Vec<ParticipantResult>, ReportError> {
    let start = read_log(start_log_path)?;
    let end = read_log(end_log_path)?;
    let roster = read_roster(roster_path)?;

    let report = build_report_from_records(&start, &end, &roster);
    info!("Built report with {} driver(s)", report.len());
    Ok(report)
}

/// Puts an ascending report into the requested order.
///
/// Descending order re-sorts by elapsed text, keeping equal texts in their
/// current relative order.
pub fn sort_report(report: &mut [ParticipantResult], order: SortOrder) {
    match order {
        SortOrder::Asc => {}
        SortOrder::Desc => {
            report.sort_by_cached_key(|result| std::cmp::Reverse(result.elapsed_text()))
        }
    }
}

/// Finds the first result whose full name matches exactly.
pub fn find_participant<'a>(
    report: &'a [ParticipantResult],
    full_name: &str,
) -> Option<&'a ParticipantResult> {
    report.iter().find(|result| result.full_name == full_name)
}
