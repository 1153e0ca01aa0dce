//! Core value types for postcode-tables.
//!
//! This crate provides the fundamental types shared by the reader, lookup and
//! pipeline crates:
//! - [`RecordFormat`] - Field and record separators of the CSV/PSV inputs
//! - [`StateCode`] - Numeric ABS state codes and their abbreviations

mod format;
mod state;

pub use format::RecordFormat;
pub use state::StateCode;
