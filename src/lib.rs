//! monaco_report library: race report building
//!
//! This library parses a race's roster and start/end timing logs, computes each
//! driver's elapsed time, ranks drivers fastest first and renders either the full
//! ranked table or a single driver's record.
//!
//! # Example
//!
//! ```no_run
//! use monaco_report::{run_report, Config, SortOrder};
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     roster_path: PathBuf::from("files/abbreviations.txt"),
//!     start_log_path: PathBuf::from("files/start.log"),
//!     end_log_path: PathBuf::from("files/end.log"),
//!     sort_order: SortOrder::Desc,
//!     ..Default::default()
//! };
//!
//! print!("{}", run_report(&config)?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod initialization;
pub mod parse;
pub mod presenter;
pub mod report;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Opt, OutputFormat};
pub use error_handling::{InitializationError, ReportError};
pub use report::{build_report, find_participant, sort_report, ParticipantResult, SortOrder};
pub use run::run_report;

// Internal run module (ties building, selection and rendering together)
mod run {
    use log::info;

    use crate::config::Config;
    use crate::error_handling::ReportError;
    use crate::presenter::{render, View};
    use crate::report::{build_report, find_participant, sort_report};

    /// Builds the report described by `config` and renders it.
    ///
    /// With `config.driver` set only that driver's record is rendered;
    /// otherwise the whole table is rendered in `config.sort_order`.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - Any of the three input files cannot be read
    /// - `config.driver` names nobody in the report
    /// - JSON output is requested and serialization fails
    pub fn run_report(config: &Config) -> Result<String, ReportError> {
        info!(
            "Building report from roster={}, start={}, end={}",
            config.roster_path.display(),
            config.start_log_path.display(),
            config.end_log_path.display()
        );
        let mut report = build_report(
            &config.roster_path,
            &config.start_log_path,
            &config.end_log_path,
        )?;

        match config.driver.as_deref() {
            Some(driver) => {
                let result = find_participant(&report, driver)
                    .ok_or_else(|| ReportError::DriverNotFound(driver.to_string()))?;
                render(View::Single(result), config.output_format)
            }
            None => {
                sort_report(&mut report, config.sort_order);
                render(View::Ranked(&report), config.output_format)
            }
        }
    }
}
