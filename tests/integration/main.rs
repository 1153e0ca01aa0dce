//! End-to-end tests for postcode-tables.
//!
//! Each test writes a small fixture data set to a temporary directory, runs a
//! full pipeline into an in-memory buffer and compares the complete output.
//!
//! ## Running Integration Tests
//!
//! ```bash
//! cargo test -p integration-tests
//! ```

mod abs_test;
mod common;
mod gnaf_test;
