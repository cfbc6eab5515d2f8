//! Application initialization.
//!
//! This module sets up process-wide resources before a report is built.
//! The only one is the logger.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
