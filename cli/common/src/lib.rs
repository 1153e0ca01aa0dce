//! Shared utilities for the postcode-tables CLI binaries.
//!
//! This crate provides common functionality shared between `abs-postcodes`
//! and `gnaf-postcodes`: log level selection, logging setup and the run
//! summary printed to stderr.

pub mod args;
pub mod logging;
pub mod summary;

pub use args::{parse_positive_usize, LogLevel, SummaryFormat};
pub use logging::init_logging;
pub use summary::{format_bytes, format_number, print_summary, render_summary};
