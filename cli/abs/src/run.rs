//! Main execution logic for abs-postcodes CLI.

use anyhow::{Context, Result};
use pt_pipeline::{AbsConfig, AbsPipeline, RunStats};
use tracing::debug;

use crate::args::Cli;

/// Build the pipeline configuration from arguments.
pub fn build_config(args: &Cli) -> AbsConfig {
    AbsConfig::new()
        .with_postal_area_file(&args.postal_area_file)
        .with_suburb_file(&args.suburb_file)
        .with_buffer_size(args.buffer_size)
}

/// Execute the ABS pipeline, writing the table to stdout.
pub fn execute(args: &Cli) -> Result<RunStats> {
    let config = build_config(args);
    debug!(?config, "Starting ABS pipeline");

    let stdout = std::io::stdout().lock();
    AbsPipeline::new(config)
        .run(std::io::BufWriter::new(stdout))
        .context("ABS pipeline failed")
}
