//! Chunked line reader for large delimited text files.
//!
//! This crate provides:
//! - [`LineReader`] - A lazy iterator over the logical lines of a file, read in
//!   fixed-size chunks with lines that straddle chunk boundaries reassembled
//! - [`ColumnSchema`] - Header-driven column resolution into [`ColumnIndex`] values
//!
//! # Example
//!
//! ```no_run
//! use pt_reader_lines::{ColumnSchema, LineReader, LineReaderConfig};
//! use pt_types::RecordFormat;
//!
//! let config = LineReaderConfig::new(RecordFormat::Psv);
//! let mut lines = LineReader::open("gnaf/ACT_LOCALITY_psv.psv", &config)?;
//!
//! let schema = ColumnSchema::new(&["LOCALITY_PID", "LOCALITY_NAME"]);
//! let header = lines.next().transpose()?.expect("header line");
//! let columns = schema.resolve(&header.text, RecordFormat::Psv);
//!
//! for line in lines {
//!     let line = line?;
//!     let fields = RecordFormat::Psv.split(&line.text);
//!     println!("{:?}", columns.index("LOCALITY_NAME").get(&fields));
//! }
//! # Ok::<(), pt_error::PtError>(())
//! ```

mod columns;
mod reader;

pub use columns::{ColumnIndex, ColumnMap, ColumnSchema};
pub use reader::{LineReader, LineReaderConfig, RecordLine, DEFAULT_BUFFER_SIZE};
