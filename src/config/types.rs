//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_END_LOG_PATH, DEFAULT_ROSTER_PATH, DEFAULT_START_LOG_PATH,
};
use crate::error_handling::ReportError;
use crate::report::SortOrder;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Report output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Ranked table / `name | team | time` line (default)
    #[default]
    Text,
    /// One JSON object per driver
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// File paths are always passed in explicitly; `Default` points at the
/// `files/` directory next to the working directory.
///
/// # Examples
///
/// ```no_run
/// use monaco_report::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     roster_path: PathBuf::from("data/abbreviations.txt"),
///     driver: Some("Sebastian Vettel".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Roster file (`CODE_Full Name_Team`)
    pub roster_path: PathBuf,

    /// Start time log
    pub start_log_path: PathBuf,

    /// End time log
    pub end_log_path: PathBuf,

    /// Report order
    pub sort_order: SortOrder,

    /// Only print this driver's record (matched on full name)
    pub driver: Option<String>,

    /// Report output format
    pub output_format: OutputFormat,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster_path: PathBuf::from(DEFAULT_ROSTER_PATH),
            start_log_path: PathBuf::from(DEFAULT_START_LOG_PATH),
            end_log_path: PathBuf::from(DEFAULT_END_LOG_PATH),
            sort_order: SortOrder::Asc,
            driver: None,
            output_format: OutputFormat::Text,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Whole report from files/, fastest first
/// monaco_report
///
/// # Explicit files, slowest first
/// monaco_report --file "abbreviations.txt start.log end.log" --desc
///
/// # One driver
/// monaco_report --file "abbreviations.txt start.log end.log" --driver "Sebastian Vettel"
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "monaco_report",
    about = "Shows the race report, or one driver's result, built from the roster and start/end logs."
)]
pub struct Opt {
    /// Roster, start log and end log paths in one space-separated argument
    #[arg(long)]
    pub file: Option<String>,

    /// Fastest drivers first (default)
    #[arg(long, conflicts_with = "desc")]
    pub asc: bool,

    /// Slowest drivers first
    #[arg(long)]
    pub desc: bool,

    /// Print only this driver's result (full name, e.g. "Sebastian Vettel")
    #[arg(long)]
    pub driver: Option<String>,

    /// Output format: text|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

/// Splits the `--file` value into roster, start log and end log paths.
///
/// # Errors
///
/// Returns `ReportError::InvalidFileList` unless the value holds exactly three
/// whitespace-separated paths.
pub fn split_file_list(files: &str) -> Result<(PathBuf, PathBuf, PathBuf), ReportError> {
    match files.split_whitespace().collect::<Vec<_>>().as_slice() {
        [roster, start, end] => Ok((
            PathBuf::from(roster),
            PathBuf::from(start),
            PathBuf::from(end),
        )),
        _ => Err(ReportError::InvalidFileList(files.to_string())),
    }
}

impl TryFrom<Opt> for Config {
    type Error = ReportError;

    fn try_from(opt: Opt) -> Result<Self, Self::Error> {
        let defaults = Config::default();
        let (roster_path, start_log_path, end_log_path) = match opt.file.as_deref() {
            Some(files) => split_file_list(files)?,
            None => (
                defaults.roster_path,
                defaults.start_log_path,
                defaults.end_log_path,
            ),
        };

        Ok(Config {
            roster_path,
            start_log_path,
            end_log_path,
            sort_order: if opt.desc {
                SortOrder::Desc
            } else {
                SortOrder::Asc
            },
            driver: opt.driver,
            output_format: opt.format,
            log_level: opt.log_level,
            log_format: opt.log_format,
        })
    }
}
