//! Application configuration and constants.
//!
//! This module provides:
//! - Default input file locations
//! - CLI option types and parsing
//! - The library `Config`

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{split_file_list, Config, LogFormat, LogLevel, Opt, OutputFormat};
