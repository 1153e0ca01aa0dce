//! Reference tables for the postcode join passes.
//!
//! This crate provides the in-memory lookup structures consulted while the
//! primary file streams past:
//! - [`PostcodeTable`] - mesh-block code to postal-area code (ABS)
//! - [`LocalityCache`] - locality PID to coordinates and postcode (G-NAF)
//! - loaders that build them from delimited files via the chunked line reader
//!
//! # Example
//!
//! ```rust,ignore
//! use pt_lookup::{load_locality_cache, load_postcode_table};
//!
//! let (postcodes, _) = load_postcode_table("POA_2016_AUST.csv", 64 * 1024)?;
//! let (localities, _) = load_locality_cache(
//!     "gnaf/ACT_LOCALITY_POINT_psv.psv",
//!     "gnaf/ACT_ADDRESS_DETAIL_psv.psv",
//!     64 * 1024,
//! )?;
//! ```

mod locality_cache;
mod loader;
mod postcode_table;

pub use locality_cache::{LocalityCache, LocalityRecord};
pub use loader::{
    fill_geolocations, fill_postcodes, load_locality_cache, load_postcode_table, LoadStats,
};
pub use postcode_table::PostcodeTable;
