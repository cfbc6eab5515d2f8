//! JSON lines rendering.
//!
//! One JSON object per driver (`code`, `full_name`, `team`, `elapsed`), in
//! report order. No cutoff line.

use crate::error_handling::ReportError;
use crate::report::ParticipantResult;

/// Renders each result as one JSON object per line.
pub fn render_json_lines<'a, I>(results: I) -> Result<String, ReportError>
where
    I: IntoIterator<Item = &'a ParticipantResult>,
{
    let mut out = String::new();
    for result in results {
        out.push_str(&serde_json::to_string(result)?);
        out.push('\n');
    }
    Ok(out)
}
