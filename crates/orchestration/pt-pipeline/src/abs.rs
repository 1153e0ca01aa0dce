//! ABS pipeline: state suburbs joined with postal areas through mesh blocks.
//!
//! The postal-area table (`POA_<year>_AUST.csv`) is loaded into a
//! [`PostcodeTable`]. The state-suburb table (`SSC_<year>_AUST.csv`) is then
//! streamed; each mesh block's suburb name is cleaned, its state code mapped,
//! and its postcode looked up. Rows are deduplicated on (name, postcode)
//! before being written.

use crate::clean::clean_suburb_name;
use crate::config::AbsConfig;
use crate::output::{quoted, OutputRow, TsvWriter};
use crate::stats::RunStats;
use indexmap::IndexMap;
use pt_error::Result;
use pt_lookup::{load_postcode_table, PostcodeTable};
use pt_reader_lines::{ColumnIndex, LineReader, LineReaderConfig};
use pt_types::{RecordFormat, StateCode};
use std::borrow::Cow;
use std::io::Write;
use tracing::{debug, info};

const SSC_MESH_BLOCK: ColumnIndex = ColumnIndex::at(0);
const SSC_NAME: ColumnIndex = ColumnIndex::at(2);
const SSC_STATE: ColumnIndex = ColumnIndex::at(3);

/// One output row of the ABS pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuburbPostcode {
    /// Mesh-block code the row came from
    pub mesh_block: String,

    /// Postal-area code, empty when the mesh block has none
    pub postcode: String,

    /// Cleaned suburb name
    pub name: String,

    /// State abbreviation, empty when the code is unknown
    pub state: &'static str,
}

impl SuburbPostcode {
    /// Joins one split state-suburb row with the postcode table.
    ///
    /// Returns the row and whether the mesh block was found in `postcodes`.
    pub fn join(fields: &[&str], postcodes: &PostcodeTable) -> (Self, bool) {
        let mesh_block = SSC_MESH_BLOCK.get(fields).unwrap_or("");
        let found = postcodes.get(mesh_block);

        let row = Self {
            mesh_block: mesh_block.to_string(),
            postcode: found.unwrap_or("").to_string(),
            name: clean_suburb_name(SSC_NAME.get(fields).unwrap_or("")),
            state: StateCode::label(SSC_STATE.get(fields).unwrap_or("")),
        };

        (row, found.is_some())
    }
}

impl OutputRow for SuburbPostcode {
    const HEADER: &'static [&'static str] = &["mb_code", "post_code", "ssc_name", "state_code"];

    fn fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.mesh_block.as_str()),
            quoted(&self.postcode),
            quoted(&self.name),
            Cow::Borrowed(self.state),
        ]
    }
}

/// Suburb rows deduplicated on (name, postcode).
///
/// A row whose name and postcode match an earlier row replaces it in place:
/// the later mesh block and state win, the earlier position is kept.
#[derive(Debug, Default)]
pub struct SuburbPostcodeList {
    rows: IndexMap<(String, String), SuburbPostcode>,
}

impl SuburbPostcodeList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a row. Returns true if it replaced an earlier duplicate.
    ///
    /// Name and postcode are kept as separate key parts, so `("Foo", "2600")`
    /// and `("Foo2600", "")` are distinct rows.
    pub fn insert(&mut self, row: SuburbPostcode) -> bool {
        let key = (row.name.clone(), row.postcode.clone());
        self.rows.insert(key, row).is_some()
    }

    /// Rows in first-insertion order of their keys.
    pub fn iter(&self) -> impl Iterator<Item = &SuburbPostcode> {
        self.rows.values()
    }

    /// Number of distinct (name, postcode) rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Runs the ABS join.
pub struct AbsPipeline {
    config: AbsConfig,
}

impl AbsPipeline {
    /// Create a pipeline with the given configuration.
    pub fn new(config: AbsConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &AbsConfig {
        &self.config
    }

    /// Streams the state-suburb table and joins every data row.
    pub fn build_list(
        &self,
        postcodes: &PostcodeTable,
        stats: &mut RunStats,
    ) -> Result<SuburbPostcodeList> {
        let path = &self.config.suburb_file;
        let reader_config =
            LineReaderConfig::new(RecordFormat::Csv).with_buffer_size(self.config.buffer_size);
        let mut reader = LineReader::open(path, &reader_config)?;
        let mut list = SuburbPostcodeList::new();

        for line in reader.by_ref() {
            let line = line?;
            if line.is_header() {
                continue;
            }

            let fields = RecordFormat::Csv.split(&line.text);
            let (row, found) = SuburbPostcode::join(&fields, postcodes);

            stats.rows_joined += 1;
            if !found {
                stats.lookup_misses += 1;
            }
            if list.insert(row) {
                stats.rows_skipped += 1;
            }
        }

        stats.record_primary_file(reader.lines_read(), reader.bytes_read());

        debug!(
            source = %path.display(),
            rows = list.len(),
            duplicates = stats.rows_skipped,
            "Joined suburbs with postcodes"
        );

        Ok(list)
    }

    /// Runs the pipeline, writing the TSV table to `out`.
    pub fn run<W: Write>(&self, out: W) -> Result<RunStats> {
        let mut stats = RunStats::new("abs");

        let (postcodes, load) =
            load_postcode_table(&self.config.postal_area_file, self.config.buffer_size)?;
        stats.record_load(&load);

        let list = self.build_list(&postcodes, &mut stats)?;

        let mut writer = TsvWriter::new(out);
        writer.write_header::<SuburbPostcode>()?;
        for row in list.iter() {
            writer.write_row(row)?;
        }

        stats.rows_emitted = writer.rows_written();
        stats.bytes_written = writer.bytes_written();
        writer.finish()?;
        stats.complete();

        info!(
            rows = stats.rows_emitted,
            lookup_misses = stats.lookup_misses,
            "ABS postcode list written"
        );

        Ok(stats)
    }
}
