//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `monaco_report` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Writing the rendered report to stdout
//!
//! All core functionality is implemented in the library crate.

use std::io::Write;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use monaco_report::initialization::init_logger_with;
use monaco_report::{run_report, Config, Opt};

fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let rendered = Config::try_from(opt)
        .context("Invalid arguments")
        .and_then(|config| run_report(&config).context("Failed to build report"));

    match rendered {
        Ok(text) => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .context("Failed to write report")?;
            Ok(())
        }
        Err(e) => {
            eprintln!("monaco_report error: {:#}", e);
            process::exit(1);
        }
    }
}
