//! Locality file discovery in a G-NAF data directory.
//!
//! G-NAF ships one set of PSV tables per state, named with the state
//! abbreviation as prefix (`ACT_LOCALITY_psv.psv`,
//! `ACT_LOCALITY_POINT_psv.psv`, ...). Discovery lists the locality tables and
//! derives each one's state from its name.

use glob::Pattern;
use pt_error::{PtError, ReaderError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A discovered locality table and the state it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalityFile {
    /// File name prefix up to the first `_`, e.g. `ACT`
    pub state: String,

    /// Full path of the locality table
    pub path: PathBuf,
}

/// Glob filter over file names (not full paths).
///
/// # Pattern Syntax
///
/// - `*` matches any sequence of characters
/// - `?` matches any single character
/// - `[abc]` matches any character in the brackets
#[derive(Debug, Clone)]
pub struct LocalityFilter {
    pattern: String,
    compiled: Pattern,
}

impl LocalityFilter {
    /// Create a new filter. Returns an error if the pattern is invalid.
    pub fn new(pattern: &str) -> Result<Self> {
        let compiled = Pattern::new(pattern)
            .map_err(|e| PtError::Config(format!("Invalid glob pattern '{pattern}': {e}")))?;

        Ok(Self {
            pattern: pattern.to_string(),
            compiled,
        })
    }

    /// Check if a file name matches the pattern.
    pub fn matches(&self, file_name: &str) -> bool {
        self.compiled.matches(file_name)
    }

    /// Get the original pattern string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// State abbreviation encoded in a G-NAF file name.
pub fn state_prefix(file_name: &str) -> &str {
    file_name.split('_').next().unwrap_or(file_name)
}

/// Lists the regular files in `dir` whose names match `pattern`.
///
/// Results are sorted by file name. Names that are not valid UTF-8 are
/// skipped. An unreadable directory is an error.
pub fn discover_locality_files(dir: &Path, pattern: &str) -> Result<Vec<LocalityFile>> {
    let filter = LocalityFilter::new(pattern)?;

    let entries = std::fs::read_dir(dir).map_err(|e| ReaderError::from_io(dir, &e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ReaderError::from_io(dir, &e))?;
        let path = entry.path();

        let Some(file_name) = entry.file_name().to_str().map(str::to_string) else {
            debug!(path = %path.display(), "Skipping file with non UTF-8 name");
            continue;
        };

        if !path.is_file() || !filter.matches(&file_name) {
            continue;
        }

        files.push(LocalityFile {
            state: state_prefix(&file_name).to_string(),
            path,
        });
    }

    files.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));

    info!(
        dir = %dir.display(),
        pattern = %filter.pattern(),
        files = files.len(),
        "Discovered locality files"
    );

    Ok(files)
}
