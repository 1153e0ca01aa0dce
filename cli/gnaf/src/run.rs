//! Main execution logic for gnaf-postcodes CLI.

use anyhow::{Context, Result};
use pt_pipeline::{GnafConfig, GnafPipeline, RunStats};
use tracing::debug;

use crate::args::Cli;

/// Build the pipeline configuration from arguments.
pub fn build_config(args: &Cli) -> GnafConfig {
    GnafConfig::new()
        .with_data_dir(&args.data_dir)
        .with_locality_pattern(&args.pattern)
        .with_buffer_size(args.buffer_size)
        .with_limit(args.limit)
}

/// Execute the G-NAF pipeline, writing the table to stdout.
pub fn execute(args: &Cli) -> Result<RunStats> {
    let config = build_config(args);
    debug!(?config, "Starting G-NAF pipeline");

    let stdout = std::io::stdout().lock();
    GnafPipeline::new(config)
        .run(std::io::BufWriter::new(stdout))
        .with_context(|| format!("G-NAF pipeline failed for {}", args.data_dir.display()))
}
