//! CLI argument definitions for gnaf-postcodes.

use clap::Parser;
use pt_cli_common::{parse_positive_usize, LogLevel, SummaryFormat};
use std::path::PathBuf;

/// Locality to postcode and coordinates table from G-NAF data.
///
/// Scans a directory of extracted G-NAF PSV files. For every
/// `<STATE>_LOCALITY_psv.psv` it joins the state's locality points and
/// address details, then prints one tab-separated row per locality with a
/// postcode to stdout.
///
/// ## Examples
///
/// Extract the needed tables from the G-NAF release, then:
///   gnaf-postcodes --data-dir ./gnaf > locality_postcodes.tsv
///
/// Quick look at the first rows:
///   gnaf-postcodes --limit 20 -l info
#[derive(Parser, Debug)]
#[command(name = "gnaf-postcodes")]
#[command(version, about, long_about = None)]
pub struct Cli {
    // === Input Files ===
    /// Directory holding the G-NAF PSV files
    #[arg(short, long, env = "PT_GNAF_DIR", default_value = "./gnaf")]
    pub data_dir: PathBuf,

    /// Glob selecting locality files within the data directory
    #[arg(short = 'P', long, default_value = "*_LOCALITY_psv.psv")]
    pub pattern: String,

    // === Processing ===
    /// Stop after emitting this many rows
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub limit: Option<u64>,

    /// Read chunk size in bytes (must be >= 1)
    #[arg(long, default_value = "65536", value_parser = parse_positive_usize)]
    pub buffer_size: usize,

    // === Reporting ===
    /// Summary format written to stderr after the run
    #[arg(long, value_enum, default_value = "text")]
    pub summary: SummaryFormat,

    /// Do not print a summary
    #[arg(short, long)]
    pub quiet: bool,

    // === Logging ===
    /// Log level
    #[arg(short = 'l', long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}
