//! pt-pipeline - join passes that turn ABS and G-NAF tables into postcode lists.
//!
//! This crate provides the two batch pipelines and the pieces they share:
//!
//! - [`AbsPipeline`]: mesh-block postal areas joined with state suburbs,
//!   deduplicated on (suburb name, postcode)
//! - [`GnafPipeline`]: G-NAF localities joined with their coordinates and
//!   postcodes, one state at a time
//! - [`TsvWriter`]: tab-separated output to any `Write` sink
//! - [`RunStats`]: counters and timings reported after a run
//!
//! Both pipelines run synchronously on the calling thread and hold their
//! reference tables in memory for the duration of the run.
//!
//! # Example
//!
//! ```ignore
//! use pt_pipeline::{GnafConfig, GnafPipeline};
//!
//! let config = GnafConfig::new().with_data_dir("./gnaf");
//! let stats = GnafPipeline::new(config).run(std::io::stdout().lock())?;
//!
//! eprintln!("Emitted {} localities", stats.rows_emitted);
//! ```

pub mod abs;
pub mod clean;
pub mod config;
pub mod discovery;
pub mod gnaf;
pub mod output;
pub mod stats;

pub use abs::{AbsPipeline, SuburbPostcode, SuburbPostcodeList};
pub use clean::clean_suburb_name;
pub use config::{AbsConfig, GnafConfig};
pub use discovery::{discover_locality_files, LocalityFile, LocalityFilter};
pub use gnaf::{GnafPipeline, LocalityPostcode};
pub use output::{OutputRow, TsvWriter};
pub use stats::RunStats;
