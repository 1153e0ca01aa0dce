//! Statistics for pipeline runs.

use chrono::{DateTime, Duration, Utc};
use pt_lookup::LoadStats;
use serde::Serialize;

/// Statistics collected during a pipeline run.
///
/// Reference-file counters (`files_read`, `lines_read`, `bytes_read`) cover
/// every file the run opened, primary and reference alike.
#[derive(Debug, Default, Clone, Serialize)]
pub struct RunStats {
    /// Pipeline name ("abs" or "gnaf")
    pub pipeline: &'static str,

    /// When processing started
    pub started_at: Option<DateTime<Utc>>,

    /// When processing completed
    pub completed_at: Option<DateTime<Utc>>,

    /// Files opened
    pub files_read: u64,

    /// Lines read across all files, headers included
    pub lines_read: u64,

    /// Bytes read across all files
    pub bytes_read: u64,

    /// States processed (G-NAF only)
    pub states_processed: u64,

    /// Primary-file rows joined against a reference table
    pub rows_joined: u64,

    /// Joined rows whose key was not in the reference table
    pub lookup_misses: u64,

    /// Rows dropped: missing join key, empty postcode, or replaced by a duplicate
    pub rows_skipped: u64,

    /// Data rows written to the output
    pub rows_emitted: u64,

    /// Bytes written to the output, header included
    pub bytes_written: u64,
}

impl RunStats {
    /// Create a new stats tracker with the current time as start time.
    pub fn new(pipeline: &'static str) -> Self {
        Self {
            pipeline,
            started_at: Some(Utc::now()),
            ..Default::default()
        }
    }

    /// Mark processing as complete with the current time.
    pub fn complete(&mut self) {
        self.completed_at = Some(Utc::now());
    }

    /// Adds the counters of loaded reference files.
    pub fn record_load(&mut self, load: &LoadStats) {
        self.files_read += load.files;
        self.lines_read += load.lines;
        self.bytes_read += load.bytes_read;
        self.rows_skipped += load.rows_skipped;
    }

    /// Adds the counters of a fully or partially read primary file.
    pub fn record_primary_file(&mut self, lines: u64, bytes: u64) {
        self.files_read += 1;
        self.lines_read += lines;
        self.bytes_read += bytes;
    }

    /// Get the total duration of the run.
    pub fn duration(&self) -> Option<Duration> {
        match (self.started_at, self.completed_at) {
            (Some(start), Some(end)) => Some(end - start),
            (Some(start), None) => Some(Utc::now() - start),
            _ => None,
        }
    }
}
