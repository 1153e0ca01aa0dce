//! G-NAF pipeline: localities joined with their coordinates and postcodes.
//!
//! Each `<STATE>_LOCALITY_psv.psv` file is processed on its own. Once its
//! header has been read, a [`LocalityCache`] is built from the state's point
//! and address-detail files; the locality file is then streamed and every
//! locality with a known postcode is written out.

use crate::config::GnafConfig;
use crate::discovery::{discover_locality_files, LocalityFile};
use crate::output::{OutputRow, TsvWriter};
use crate::stats::RunStats;
use pt_error::Result;
use pt_lookup::{load_locality_cache, LocalityCache};
use pt_reader_lines::{ColumnMap, ColumnSchema, LineReader, LineReaderConfig};
use pt_types::RecordFormat;
use std::borrow::Cow;
use std::io::Write;
use tracing::{debug, info, trace, warn};

const LOCALITY_PID: &str = "LOCALITY_PID";
const LOCALITY_NAME: &str = "LOCALITY_NAME";
const STATE_PID: &str = "STATE_PID";

/// One output row of the G-NAF pipeline.
///
/// A locality known only from the address-detail file has no point, so its
/// `longitude` and `latitude` are written as empty fields, not `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalityPostcode {
    /// State abbreviation taken from the file name
    pub state: String,

    /// G-NAF locality persistent identifier
    pub locality_pid: String,

    /// Postcode, never empty
    pub postcode: String,

    /// Locality name as published
    pub name: String,

    /// Longitude, empty when the locality has no point
    pub longitude: String,

    /// Latitude, empty when the locality has no point
    pub latitude: String,
}

impl LocalityPostcode {
    /// Joins one split locality row with the state's cache.
    ///
    /// `None` when the row has no PID, the PID is not cached, or its postcode
    /// is empty.
    pub fn join(
        state: &str,
        columns: &ColumnMap,
        fields: &[&str],
        cache: &LocalityCache,
    ) -> Option<Self> {
        let pid = columns.index(LOCALITY_PID).get(fields)?;
        let record = cache.get(pid)?;
        if !record.has_postcode() {
            return None;
        }

        Some(Self {
            state: state.to_string(),
            locality_pid: pid.to_string(),
            postcode: record.postcode.clone().unwrap_or_default(),
            name: columns
                .index(LOCALITY_NAME)
                .get(fields)
                .unwrap_or("")
                .to_string(),
            longitude: record.longitude.clone().unwrap_or_default(),
            latitude: record.latitude.clone().unwrap_or_default(),
        })
    }
}

impl OutputRow for LocalityPostcode {
    const HEADER: &'static [&'static str] = &[
        "STATE",
        "LOCALITY_PID",
        "POSTCODE",
        "LOCALITY_NAME",
        "LONGITUDE",
        "LATITUDE",
    ];

    fn fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.state.as_str()),
            Cow::Borrowed(self.locality_pid.as_str()),
            Cow::Borrowed(self.postcode.as_str()),
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.longitude.as_str()),
            Cow::Borrowed(self.latitude.as_str()),
        ]
    }
}

/// Runs the G-NAF join over every discovered state.
pub struct GnafPipeline {
    config: GnafConfig,
    schema: ColumnSchema,
}

impl GnafPipeline {
    /// Create a pipeline with the given configuration.
    pub fn new(config: GnafConfig) -> Self {
        Self {
            config,
            schema: ColumnSchema::new(&[LOCALITY_PID, LOCALITY_NAME, STATE_PID]),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &GnafConfig {
        &self.config
    }

    /// Runs the pipeline, writing the TSV table to `out`.
    pub fn run<W: Write>(&self, out: W) -> Result<RunStats> {
        let mut stats = RunStats::new("gnaf");

        let files =
            discover_locality_files(&self.config.data_dir, &self.config.locality_pattern)?;
        if files.is_empty() {
            warn!(
                dir = %self.config.data_dir.display(),
                pattern = %self.config.locality_pattern,
                "No locality files found"
            );
        }

        let mut writer = TsvWriter::new(out);
        writer.write_header::<LocalityPostcode>()?;

        for file in &files {
            if self.limit_reached(&writer) {
                debug!(limit = ?self.config.limit, "Row limit reached, skipping remaining states");
                break;
            }
            self.process_state(file, &mut writer, &mut stats)?;
        }

        stats.rows_emitted = writer.rows_written();
        stats.bytes_written = writer.bytes_written();
        writer.finish()?;
        stats.complete();

        info!(
            states = stats.states_processed,
            rows = stats.rows_emitted,
            "G-NAF postcode list written"
        );

        Ok(stats)
    }

    /// Streams one state's locality file into `writer`.
    fn process_state<W: Write>(
        &self,
        file: &LocalityFile,
        writer: &mut TsvWriter<W>,
        stats: &mut RunStats,
    ) -> Result<()> {
        let reader_config =
            LineReaderConfig::new(RecordFormat::Psv).with_buffer_size(self.config.buffer_size);
        let mut reader = LineReader::open(&file.path, &reader_config)?;

        let Some(header) = reader.next().transpose()? else {
            debug!(state = %file.state, path = %file.path.display(), "Locality file is empty");
            stats.record_primary_file(reader.lines_read(), reader.bytes_read());
            return Ok(());
        };

        let columns = self.schema.resolve(&header.text, RecordFormat::Psv);
        if !columns.is_complete() {
            warn!(
                path = %file.path.display(),
                missing = ?columns.missing(),
                "Columns not found in header, their values will be empty"
            );
        }

        let (cache, load) = load_locality_cache(
            self.config.point_file(&file.state),
            self.config.address_file(&file.state),
            self.config.buffer_size,
        )?;
        stats.record_load(&load);

        let emitted_before = writer.rows_written();

        for line in reader.by_ref() {
            let line = line?;
            let fields = RecordFormat::Psv.split(&line.text);
            stats.rows_joined += 1;

            match LocalityPostcode::join(&file.state, &columns, &fields, &cache) {
                Some(row) => writer.write_row(&row)?,
                None => {
                    let cached = columns
                        .index(LOCALITY_PID)
                        .get(&fields)
                        .and_then(|pid| cache.get(pid));
                    if cached.is_none() {
                        stats.lookup_misses += 1;
                    }
                    trace!(
                        state = %file.state,
                        line = line.index,
                        "Skipping locality without postcode"
                    );
                    stats.rows_skipped += 1;
                }
            }

            if self.limit_reached(writer) {
                break;
            }
        }

        stats.record_primary_file(reader.lines_read(), reader.bytes_read());
        stats.states_processed += 1;

        info!(
            state = %file.state,
            localities = cache.len(),
            rows = writer.rows_written() - emitted_before,
            "Processed state"
        );

        Ok(())
    }

    fn limit_reached<W: Write>(&self, writer: &TsvWriter<W>) -> bool {
        self.config
            .limit
            .is_some_and(|limit| writer.rows_written() >= limit)
    }
}
