//! Configuration types for the pipelines.

use pt_reader_lines::DEFAULT_BUFFER_SIZE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// ABS postal-area table read by default.
pub const DEFAULT_POSTAL_AREA_FILE: &str = "POA_2016_AUST.csv";

/// ABS state-suburb table read by default.
pub const DEFAULT_SUBURB_FILE: &str = "SSC_2016_AUST.csv";

/// Directory holding the extracted G-NAF PSV files.
pub const DEFAULT_GNAF_DIR: &str = "./gnaf";

/// Glob selecting G-NAF locality files.
pub const DEFAULT_LOCALITY_PATTERN: &str = "*_LOCALITY_psv.psv";

/// Configuration for the ABS pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbsConfig {
    /// Mesh block to postal area table (`POA_<year>_AUST.csv`)
    pub postal_area_file: PathBuf,

    /// Mesh block to state suburb table (`SSC_<year>_AUST.csv`)
    pub suburb_file: PathBuf,

    /// Read chunk size in bytes
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

impl Default for AbsConfig {
    fn default() -> Self {
        Self {
            postal_area_file: PathBuf::from(DEFAULT_POSTAL_AREA_FILE),
            suburb_file: PathBuf::from(DEFAULT_SUBURB_FILE),
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl AbsConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the postal-area table path.
    pub fn with_postal_area_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.postal_area_file = path.into();
        self
    }

    /// Set the state-suburb table path.
    pub fn with_suburb_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.suburb_file = path.into();
        self
    }

    /// Set the read chunk size.
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }
}

/// Configuration for the G-NAF pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GnafConfig {
    /// Directory scanned for locality files and their companions
    pub data_dir: PathBuf,

    /// Glob matched against file names in `data_dir`
    #[serde(default = "default_locality_pattern")]
    pub locality_pattern: String,

    /// Read chunk size in bytes
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,

    /// Stop after emitting this many rows
    #[serde(default)]
    pub limit: Option<u64>,
}

impl Default for GnafConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_GNAF_DIR),
            locality_pattern: default_locality_pattern(),
            buffer_size: DEFAULT_BUFFER_SIZE,
            limit: None,
        }
    }
}

impl GnafConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set the locality file glob.
    pub fn with_locality_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.locality_pattern = pattern.into();
        self
    }

    /// Set the read chunk size.
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Set the row limit.
    pub fn with_limit(mut self, limit: Option<u64>) -> Self {
        self.limit = limit;
        self
    }

    /// Locality point file for a state, e.g. `gnaf/ACT_LOCALITY_POINT_psv.psv`.
    pub fn point_file(&self, state: &str) -> PathBuf {
        companion_file(&self.data_dir, state, "LOCALITY_POINT")
    }

    /// Address detail file for a state, e.g. `gnaf/ACT_ADDRESS_DETAIL_psv.psv`.
    pub fn address_file(&self, state: &str) -> PathBuf {
        companion_file(&self.data_dir, state, "ADDRESS_DETAIL")
    }
}

fn companion_file(dir: &Path, state: &str, table: &str) -> PathBuf {
    dir.join(format!("{state}_{table}_psv.psv"))
}

fn default_buffer_size() -> usize {
    DEFAULT_BUFFER_SIZE
}

fn default_locality_pattern() -> String {
    DEFAULT_LOCALITY_PATTERN.to_string()
}
