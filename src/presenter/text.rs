//! Plain text rendering.

use crate::report::ParticipantResult;

/// Rank before which the qualification cutoff line is printed.
pub const CUTOFF_RANK: usize = 16;

/// Width of the qualification cutoff line.
pub const SEPARATOR_WIDTH: usize = 59;

/// Renders the ranked table, one line per driver, ranks starting at 1.
///
/// ```text
///  1. Sebastian Vettel     | FERRARI                   | 0:01:04.415000
/// ```
///
/// A line of dashes goes right before rank 16.
pub fn render_table(report: &[ParticipantResult]) -> String {
    let mut out = String::new();
    for (rank, result) in (1..).zip(report) {
        if rank == CUTOFF_RANK {
            out.push_str(&"-".repeat(SEPARATOR_WIDTH));
            out.push('\n');
        }
        out.push_str(&format!(
            "{:>2}. {:<20} | {:<25} | {}\n",
            rank,
            result.full_name,
            result.team,
            result.elapsed_text()
        ));
    }
    out
}

/// Renders a single driver's record without rank or padding.
pub fn render_participant(result: &ParticipantResult) -> String {
    format!(
        "{} | {} | {}\n",
        result.full_name,
        result.team,
        result.elapsed_text()
    )
}
