//! Record format descriptors for delimited input files.

use serde::{Deserialize, Serialize};

/// Layout of a delimited text file.
///
/// ABS tables are comma-separated with `\n` line endings; G-NAF tables are
/// pipe-separated with `\r\n` line endings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordFormat {
    /// Comma-separated values, `\n` record separator.
    Csv,
    /// Pipe-separated values, `\r\n` record separator.
    Psv,
}

impl RecordFormat {
    /// Character separating fields within a record.
    pub fn field_separator(&self) -> char {
        match self {
            Self::Csv => ',',
            Self::Psv => '|',
        }
    }

    /// Byte sequence terminating a record.
    pub fn record_separator(&self) -> &'static [u8] {
        match self {
            Self::Csv => b"\n",
            Self::Psv => b"\r\n",
        }
    }

    /// Splits a line into its fields.
    ///
    /// No quoting rules apply: every separator starts a new field.
    pub fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        line.split(self.field_separator()).collect()
    }
}

impl std::fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Psv => write!(f, "psv"),
        }
    }
}
