//! Loading utilities for reference tables.

use crate::{LocalityCache, PostcodeTable};
use pt_error::Result;
use pt_reader_lines::{ColumnIndex, ColumnMap, ColumnSchema, LineReader, LineReaderConfig};
use pt_types::RecordFormat;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, trace, warn};

/// Mesh-block code column of the ABS postal-area table.
const POA_MESH_BLOCK: ColumnIndex = ColumnIndex::at(0);

/// Postal-area code column of the ABS postal-area table.
const POA_POSTCODE: ColumnIndex = ColumnIndex::at(1);

const LOCALITY_PID: &str = "LOCALITY_PID";
const LONGITUDE: &str = "LONGITUDE";
const LATITUDE: &str = "LATITUDE";
const POSTCODE: &str = "POSTCODE";

/// Counters from loading one or more reference files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Files opened
    pub files: u64,

    /// Lines read, headers included
    pub lines: u64,

    /// Data rows skipped because their join key was absent
    pub rows_skipped: u64,

    /// Bytes read
    pub bytes_read: u64,
}

impl LoadStats {
    /// Adds another file's counters to these.
    pub fn merge(&mut self, other: &LoadStats) {
        self.files += other.files;
        self.lines += other.lines;
        self.rows_skipped += other.rows_skipped;
        self.bytes_read += other.bytes_read;
    }

    fn from_reader<R: std::io::Read>(reader: &LineReader<R>, rows_skipped: u64) -> Self {
        Self {
            files: 1,
            lines: reader.lines_read(),
            rows_skipped,
            bytes_read: reader.bytes_read(),
        }
    }
}

/// Loads a [`PostcodeTable`] from the ABS `POA_<year>_AUST.csv` table.
///
/// The first line is a header; every other line contributes
/// `mesh block (col 0) -> postcode (col 1)`. A row without a postcode column
/// maps its mesh block to the empty string.
pub fn load_postcode_table(
    path: impl AsRef<Path>,
    buffer_size: usize,
) -> Result<(PostcodeTable, LoadStats)> {
    let path = path.as_ref();
    let config = LineReaderConfig::new(RecordFormat::Csv).with_buffer_size(buffer_size);
    let mut reader = LineReader::open(path, &config)?;
    let mut table = PostcodeTable::new();
    let mut skipped = 0;

    for line in reader.by_ref() {
        let line = line?;
        if line.is_header() {
            continue;
        }

        let fields = RecordFormat::Csv.split(&line.text);
        let Some(mesh_block) = POA_MESH_BLOCK.get(&fields) else {
            skipped += 1;
            continue;
        };
        let postcode = POA_POSTCODE.get(&fields).unwrap_or("");

        table.insert(mesh_block.to_string(), postcode.to_string());
    }

    let stats = LoadStats::from_reader(&reader, skipped);

    info!(
        source = %path.display(),
        entries = table.len(),
        lines = stats.lines,
        "Loaded PostcodeTable"
    );

    Ok((table, stats))
}

/// Fills coordinates from a G-NAF `<STATE>_LOCALITY_POINT_psv.psv` file.
///
/// Columns `LOCALITY_PID`, `LONGITUDE` and `LATITUDE` are located by header
/// name. The first point seen for a locality is kept.
pub fn fill_geolocations(
    cache: &mut LocalityCache,
    path: impl AsRef<Path>,
    buffer_size: usize,
) -> Result<LoadStats> {
    let schema = ColumnSchema::new(&[LOCALITY_PID, LONGITUDE, LATITUDE]);

    scan_psv(path.as_ref(), buffer_size, &schema, |columns, fields| {
        let Some(pid) = columns.index(LOCALITY_PID).get(fields) else {
            return false;
        };
        cache.set_geolocation(
            pid,
            columns.index(LONGITUDE).get(fields),
            columns.index(LATITUDE).get(fields),
        );
        true
    })
}

/// Fills postcodes from a G-NAF `<STATE>_ADDRESS_DETAIL_psv.psv` file.
///
/// Columns `LOCALITY_PID` and `POSTCODE` are located by header name. Each
/// address overwrites the postcode of its locality, so the last one wins.
pub fn fill_postcodes(
    cache: &mut LocalityCache,
    path: impl AsRef<Path>,
    buffer_size: usize,
) -> Result<LoadStats> {
    let schema = ColumnSchema::new(&[LOCALITY_PID, POSTCODE]);

    scan_psv(path.as_ref(), buffer_size, &schema, |columns, fields| {
        let Some(pid) = columns.index(LOCALITY_PID).get(fields) else {
            return false;
        };
        cache.set_postcode(pid, columns.index(POSTCODE).get(fields));
        true
    })
}

/// Builds a fresh [`LocalityCache`] from a state's point and address-detail files.
///
/// Points are loaded first, then postcodes are merged in.
pub fn load_locality_cache(
    point_file: impl AsRef<Path>,
    address_file: impl AsRef<Path>,
    buffer_size: usize,
) -> Result<(LocalityCache, LoadStats)> {
    let mut cache = LocalityCache::new();
    let mut stats = fill_geolocations(&mut cache, point_file.as_ref(), buffer_size)?;
    stats.merge(&fill_postcodes(&mut cache, address_file.as_ref(), buffer_size)?);

    info!(
        point_file = %point_file.as_ref().display(),
        address_file = %address_file.as_ref().display(),
        entries = cache.len(),
        with_postcode = cache.postcode_count(),
        "Loaded LocalityCache"
    );

    Ok((cache, stats))
}

/// Streams a PSV file, resolving `schema` against its header and handing each
/// data row to `on_row`. `on_row` returns false to count the row as skipped.
fn scan_psv<F>(
    path: &Path,
    buffer_size: usize,
    schema: &ColumnSchema,
    mut on_row: F,
) -> Result<LoadStats>
where
    F: FnMut(&ColumnMap, &[&str]) -> bool,
{
    let config = LineReaderConfig::new(RecordFormat::Psv).with_buffer_size(buffer_size);
    let mut reader = LineReader::open(path, &config)?;

    let columns = match reader.next().transpose()? {
        Some(header) => schema.resolve(&header.text, RecordFormat::Psv),
        None => {
            debug!(source = %path.display(), "Reference file is empty");
            return Ok(LoadStats::from_reader(&reader, 0));
        }
    };

    if !columns.is_complete() {
        warn!(
            source = %path.display(),
            missing = ?columns.missing(),
            "Columns not found in header, their values will be empty"
        );
    }

    let mut skipped = 0;
    for line in reader.by_ref() {
        let line = line?;
        let fields = RecordFormat::Psv.split(&line.text);
        if !on_row(&columns, &fields) {
            trace!(
                source = %path.display(),
                line = line.index,
                "Skipping row without locality PID"
            );
            skipped += 1;
        }
    }

    let stats = LoadStats::from_reader(&reader, skipped);

    debug!(
        source = %path.display(),
        lines = stats.lines,
        skipped = stats.rows_skipped,
        "Scanned reference file"
    );

    Ok(stats)
}
