//! Error handling.
//!
//! This module provides the error types returned by the library:
//! - **Initialization errors**: logger setup failures
//! - **Report errors**: unreadable input files, bad CLI file lists, driver lookup misses
//!
//! Lines that fail their pattern and codes missing from one source are not
//! errors. They are dropped while parsing and joining.

mod types;

// Re-export public API
pub use types::{InitializationError, ReportError};
