//! Logger initialization.
//!
//! Logs go to stderr; stdout only ever carries the rendered report.

use std::io::Write;

use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Renders one log record as a single-line JSON object.
fn json_line(ts_millis: i64, level: Level, target: &str, msg: &str) -> String {
    serde_json::json!({
        "ts": ts_millis,
        "level": level.to_string(),
        "target": target,
        "msg": msg,
    })
    .to_string()
}

fn colored_level(level: Level) -> ColoredString {
    let text = level.to_string();
    match level {
        Level::Error => text.red(),
        Level::Warn => text.yellow(),
        Level::Info => text.green(),
        Level::Debug => text.blue(),
        Level::Trace => text.purple(),
    }
}

/// Initializes the stderr logger.
///
/// `RUST_LOG` is read first and `level` (from `--log-level`) overrides it, so
/// `RUST_LOG=monaco_report=debug monaco_report` still works without flags.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already set.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder
        .filter_level(level)
        .filter_module("monaco_report", level)
        .target(env_logger::Target::Stderr);

    match format {
        LogFormat::Json => builder.format(|buf, record| {
            let line = json_line(
                chrono::Utc::now().timestamp_millis(),
                record.level(),
                record.target(),
                &record.args().to_string(),
            );
            writeln!(buf, "{}", line)
        }),
        LogFormat::Plain => builder.format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                record.target().cyan(),
                colored_level(record.level()),
                record.args()
            )
        }),
    };

    builder.try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global logger can only be set once per process, so whichever call
    // comes first may succeed and every later one must fail cleanly.

    #[test]
    fn test_json_line_fields() {
        let line = json_line(
            1_700_000_000_000,
            Level::Info,
            "monaco_report",
            "Built \"report\"",
        );
        let value: serde_json::Value = serde_json::from_str(&line).expect("Should be JSON");
        assert_eq!(value["ts"], 1_700_000_000_000i64);
        assert_eq!(value["level"], "INFO");
        assert_eq!(value["target"], "monaco_report");
        assert_eq!(value["msg"], "Built \"report\"");
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_init_logger_plain_format_twice() {
        let _ = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        let second = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        assert!(matches!(second, Err(InitializationError::LoggerError(_))));
    }

    #[test]
    fn test_init_logger_json_format_twice() {
        let _ = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        let second = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        assert!(matches!(second, Err(InitializationError::LoggerError(_))));
    }

    #[test]
    fn test_init_logger_error_message() {
        let _ = init_logger_with(LevelFilter::Warn, LogFormat::Plain);
        let err = init_logger_with(LevelFilter::Warn, LogFormat::Plain)
            .expect_err("Logger is already initialized");
        assert!(err.to_string().starts_with("Logger initialization error"));
    }
}
