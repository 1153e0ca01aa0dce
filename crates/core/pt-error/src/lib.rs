//! Error types for postcode-tables.
//!
//! This crate provides:
//! - [`PtError`] - Top-level error enum for all pipeline errors
//! - [`ReaderError`] - File-system failures while opening or reading input files
//!
//! Missing lookup keys and unresolved header columns are not errors: they
//! surface as empty fields in the output. Everything represented here is fatal
//! for the run.

use std::io;
use std::path::Path;
use thiserror::Error;

/// Top-level error type for postcode-tables.
#[derive(Error, Debug)]
pub enum PtError {
    /// Reader errors (file access, reads)
    #[error("Reader error: {0}")]
    Reader(#[from] ReaderError),

    /// Configuration errors (bad glob pattern, zero buffer size)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure writing to the output sink
    #[error("Output error: {0}")]
    Output(String),
}

/// Reader-related errors.
#[derive(Error, Debug)]
pub enum ReaderError {
    /// File not found
    #[error("File not found: {0}")]
    NotFound(String),

    /// Access denied
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// I/O error during open, read or directory scan
    #[error("I/O error: {0}")]
    Io(String),
}

impl ReaderError {
    /// Maps an [`io::Error`] raised for `path` onto the matching variant.
    pub fn from_io(path: &Path, error: &io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.display().to_string()),
            io::ErrorKind::PermissionDenied => Self::AccessDenied(path.display().to_string()),
            _ => Self::Io(format!("{}: {}", path.display(), error)),
        }
    }
}

impl PtError {
    /// Wraps a write failure on the output sink.
    pub fn output(error: io::Error) -> Self {
        Self::Output(error.to_string())
    }
}

/// Result type alias using PtError.
pub type Result<T> = std::result::Result<T, PtError>;
