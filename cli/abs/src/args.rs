//! CLI argument definitions for abs-postcodes.

use clap::Parser;
use pt_cli_common::{parse_positive_usize, LogLevel, SummaryFormat};
use std::path::PathBuf;

/// Suburb name to postcode table from ABS mesh-block data.
///
/// Joins the ABS postal-area and state-suburb tables on mesh-block code and
/// prints one tab-separated row per distinct (suburb, postcode) pair to stdout.
///
/// ## Examples
///
/// With the 2016 tables in the current directory:
///   abs-postcodes > suburb_postcodes.tsv
///
/// With explicit paths:
///   abs-postcodes --postal-area-file data/POA_2016_AUST.csv \
///       --suburb-file data/SSC_2016_AUST.csv
#[derive(Parser, Debug)]
#[command(name = "abs-postcodes")]
#[command(version, about, long_about = None)]
pub struct Cli {
    // === Input Files ===
    /// Mesh block to postal area table
    #[arg(long, env = "PT_POA_FILE", default_value = "POA_2016_AUST.csv")]
    pub postal_area_file: PathBuf,

    /// Mesh block to state suburb table
    #[arg(long, env = "PT_SSC_FILE", default_value = "SSC_2016_AUST.csv")]
    pub suburb_file: PathBuf,

    // === Processing ===
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
