//! ABS pipeline end-to-end tests.

use crate::common::{abs_fixture, write_csv, ABS_EXPECTED};
use pt_error::{PtError, ReaderError};
use pt_pipeline::{AbsConfig, AbsPipeline};
use std::path::Path;

fn run(poa: &Path, ssc: &Path, buffer_size: usize) -> (String, pt_pipeline::RunStats) {
    let config = AbsConfig::new()
        .with_postal_area_file(poa)
        .with_suburb_file(ssc)
        .with_buffer_size(buffer_size);

    let mut out = Vec::new();
    let stats = AbsPipeline::new(config).run(&mut out).unwrap();
    (String::from_utf8(out).unwrap(), stats)
}

#[test]
fn test_abs_full_output() {
    let (_dir, poa, ssc) = abs_fixture();
    let (output, stats) = run(&poa, &ssc, 64 * 1024);

    assert_eq!(output, ABS_EXPECTED);
    assert_eq!(stats.pipeline, "abs");
    assert_eq!(stats.files_read, 2);
    assert_eq!(stats.rows_joined, 6);
    assert_eq!(stats.lookup_misses, 2);
    assert_eq!(stats.rows_emitted, 5);
    assert_eq!(stats.bytes_written, ABS_EXPECTED.len() as u64);
    assert!(stats.completed_at.is_some());
}

#[test]
fn test_abs_output_independent_of_buffer_size() {
    let (_dir, poa, ssc) = abs_fixture();

    for buffer_size in [1, 3, 7, 16, 64] {
        let (output, _) = run(&poa, &ssc, buffer_size);
        assert_eq!(output, ABS_EXPECTED, "buffer size {buffer_size}");
    }
}

#[test]
fn test_abs_is_idempotent() {
    let (_dir, poa, ssc) = abs_fixture();
    let (first, _) = run(&poa, &ssc, 4096);
    let (second, _) = run(&poa, &ssc, 4096);
    assert_eq!(first, second);
}

#[test]
fn test_abs_header_only_inputs() {
    let (dir, _, _) = abs_fixture();
    let poa = write_csv(dir.path(), "POA_EMPTY.csv", &["MB_CODE_2016,POA_CODE_2016"]);
    let ssc = write_csv(dir.path(), "SSC_EMPTY.csv", &["MB_CODE_2016,SSC_CODE_2016"]);

    let (output, stats) = run(&poa, &ssc, 4096);
    assert_eq!(output, "mb_code\tpost_code\tssc_name\tstate_code\n");
    assert_eq!(stats.rows_emitted, 0);
}

#[test]
fn test_abs_missing_postal_area_file() {
    let (dir, _, ssc) = abs_fixture();
    let config = AbsConfig::new()
        .with_postal_area_file(dir.path().join("missing.csv"))
        .with_suburb_file(ssc);

    let mut out = Vec::new();
    let result = AbsPipeline::new(config).run(&mut out);

    assert!(matches!(
        result,
        Err(PtError::Reader(ReaderError::NotFound(_)))
    ));
    assert!(out.is_empty());
}
