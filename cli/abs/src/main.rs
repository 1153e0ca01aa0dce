//! abs-postcodes CLI
//!
//! Suburb name to postcode table from ABS mesh-block data.

use clap::Parser;
use pt_cli_common::{init_logging, print_summary};

mod args;
mod run;

use args::Cli;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Initialize logging (to stderr, so stdout is clean for the table)
    init_logging(args.log_level)?;

    let stats = run::execute(&args)?;

    if !args.quiet {
        print_summary(&stats, args.summary)?;
    }

    Ok(())
}
