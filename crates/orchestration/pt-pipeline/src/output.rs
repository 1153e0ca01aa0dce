//! Tab-separated output.

use pt_error::{PtError, Result};
use std::borrow::Cow;
use std::io::Write;

/// A row that can be written as one line of a TSV table.
pub trait OutputRow {
    /// Column names written on the first line.
    const HEADER: &'static [&'static str];

    /// Field values in `HEADER` order, already quoted where needed.
    fn fields(&self) -> Vec<Cow<'_, str>>;
}

/// Writes a header and rows as tab-separated lines to any `Write` sink.
///
/// Fields are joined with `\t` and lines end with `\n`. No escaping is
/// applied; callers quote fields themselves.
pub struct TsvWriter<W: Write> {
    out: W,
    line: String,
    rows_written: u64,
    bytes_written: u64,
}

impl<W: Write> TsvWriter<W> {
    /// Create a writer over `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            line: String::new(),
            rows_written: 0,
            bytes_written: 0,
        }
    }

    /// Writes the header line of `R`.
    pub fn write_header<R: OutputRow>(&mut self) -> Result<()> {
        self.write_line(R::HEADER.iter().copied())
    }

    /// Writes one data row.
    pub fn write_row<R: OutputRow>(&mut self, row: &R) -> Result<()> {
        let fields = row.fields();
        self.write_line(fields.iter().map(|f| f.as_ref()))?;
        self.rows_written += 1;
        Ok(())
    }

    /// Number of data rows written (header excluded).
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// Number of bytes written, header included.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Flushes and returns the underlying sink.
    pub fn finish(mut self) -> Result<W> {
        self.out.flush().map_err(PtError::output)?;
        Ok(self.out)
    }

    fn write_line<'a>(&mut self, fields: impl Iterator<Item = &'a str>) -> Result<()> {
        self.line.clear();
        for (i, field) in fields.enumerate() {
            if i > 0 {
                self.line.push('\t');
            }
            self.line.push_str(field);
        }
        self.line.push('\n');

        self.out
            .write_all(self.line.as_bytes())
            .map_err(PtError::output)?;
        self.bytes_written += self.line.len() as u64;
        Ok(())
    }
}

/// Wraps a field in literal double quotes.
pub(crate) fn quoted(value: &str) -> Cow<'static, str> {
    Cow::Owned(format!("\"{value}\""))
}
