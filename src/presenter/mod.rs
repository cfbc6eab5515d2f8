//! Report presentation.
//!
//! Renders an already built and ordered report, or a single driver's record,
//! as text or JSON lines. Rendering never reorders or changes the input.

mod json;
mod text;

use crate::config::OutputFormat;
use crate::error_handling::ReportError;
use crate::report::ParticipantResult;

pub use json::render_json_lines;
pub use text::{render_participant, render_table, CUTOFF_RANK, SEPARATOR_WIDTH};

/// What to render.
#[derive(Debug, Clone, Copy)]
pub enum View<'a> {
    /// Full ranked table
    Ranked(&'a [ParticipantResult]),
    /// One driver's record, no rank
    Single(&'a ParticipantResult),
}

/// Renders a view in the given output format.
///
/// # Errors
///
/// Only JSON output can fail, if serialization fails.
pub fn render(view: View<'_>, format: OutputFormat) -> Result<String, ReportError> {
    match (format, view) {
        (OutputFormat::Text, View::Ranked(report)) => Ok(render_table(report)),
        (OutputFormat::Text, View::Single(result)) => Ok(render_participant(result)),
        (OutputFormat::Json, View::Ranked(report)) => render_json_lines(report),
        (OutputFormat::Json, View::Single(result)) => render_json_lines([result]),
    }
}
