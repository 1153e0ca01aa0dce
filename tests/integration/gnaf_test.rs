//! G-NAF pipeline end-to-end tests.

use crate::common::{gnaf_fixture, write_psv, GNAF_EXPECTED};
use pt_error::{PtError, ReaderError};
use pt_pipeline::{discover_locality_files, GnafConfig, GnafPipeline, RunStats};
use std::fs;
use std::path::Path;

fn run(config: GnafConfig) -> (String, RunStats) {
    let mut out = Vec::new();
    let stats = GnafPipeline::new(config).run(&mut out).unwrap();
    (String::from_utf8(out).unwrap(), stats)
}

fn config(dir: &Path) -> GnafConfig {
    GnafConfig::new().with_data_dir(dir)
}

#[test]
fn test_gnaf_full_output() {
    let dir = gnaf_fixture();
    let (output, stats) = run(config(dir.path()));

    assert_eq!(output, GNAF_EXPECTED);
    assert_eq!(stats.pipeline, "gnaf");
    assert_eq!(stats.states_processed, 2);
    assert_eq!(stats.files_read, 6);
    assert_eq!(stats.rows_joined, 5);
    assert_eq!(stats.lookup_misses, 1);
    assert_eq!(stats.rows_emitted, 3);
}

#[test]
fn test_gnaf_output_independent_of_buffer_size() {
    let dir = gnaf_fixture();

    for buffer_size in [1, 2, 5, 13, 100] {
        let (output, _) = run(config(dir.path()).with_buffer_size(buffer_size));
        assert_eq!(output, GNAF_EXPECTED, "buffer size {buffer_size}");
    }
}

#[test]
fn test_gnaf_is_idempotent() {
    let dir = gnaf_fixture();
    let (first, _) = run(config(dir.path()));
    let (second, _) = run(config(dir.path()));
    assert_eq!(first, second);
}

#[test]
fn test_gnaf_limit_stops_early() {
    let dir = gnaf_fixture();
    let (output, stats) = run(config(dir.path()).with_limit(Some(2)));

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "ACT\tACT570\t2600\tACTON\t149.11\t-35.28");
    assert_eq!(lines[2], "ACT\tACT572\t2618\tHALL\t\t");
    assert_eq!(stats.rows_emitted, 2);
    assert_eq!(stats.states_processed, 1);
}

#[test]
fn test_gnaf_discovery_ignores_companion_files() {
    let dir = gnaf_fixture();
    let files = discover_locality_files(dir.path(), "*_LOCALITY_psv.psv").unwrap();

    let states: Vec<&str> = files.iter().map(|f| f.state.as_str()).collect();
    assert_eq!(states, vec!["ACT", "OT"]);
}

#[test]
fn test_gnaf_empty_locality_file_needs_no_companions() {
    let dir = gnaf_fixture();
    fs::write(dir.path().join("QLD_LOCALITY_psv.psv"), "").unwrap();

    let (output, stats) = run(config(dir.path()));
    assert_eq!(output, GNAF_EXPECTED);
    assert_eq!(stats.states_processed, 2);
}

#[test]
fn test_gnaf_missing_companion_is_fatal() {
    let dir = gnaf_fixture();
    write_psv(
        dir.path(),
        "TAS_LOCALITY_psv.psv",
        &["LOCALITY_PID|LOCALITY_NAME|STATE_PID", "TAS1|HOBART|6"],
    );

    let mut out = Vec::new();
    let result = GnafPipeline::new(config(dir.path())).run(&mut out);
    assert!(matches!(
        result,
        Err(PtError::Reader(ReaderError::NotFound(_)))
    ));
}

#[test]
fn test_gnaf_no_matching_files_writes_header_only() {
    let dir = gnaf_fixture();
    let (output, stats) = run(config(dir.path()).with_locality_pattern("NONE_*.psv"));

    assert_eq!(
        output,
        "STATE\tLOCALITY_PID\tPOSTCODE\tLOCALITY_NAME\tLONGITUDE\tLATITUDE\n"
    );
    assert_eq!(stats.states_processed, 0);
}

#[test]
fn test_gnaf_missing_data_dir_is_fatal() {
    let dir = gnaf_fixture();
    let mut out = Vec::new();
    let result = GnafPipeline::new(config(&dir.path().join("nope"))).run(&mut out);
    assert!(result.is_err());
}
