//! Common utilities for integration tests.
//!
//! Fixture writers for ABS CSV tables and G-NAF PSV tables. PSV fixtures are
//! written with `\r\n` line endings as G-NAF ships them.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Writes `lines` joined with `\n`, with a trailing newline.
pub fn write_csv(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(&path, content).unwrap();
    path
}

/// Writes `lines` joined with `\r\n`, with a trailing separator.
pub fn write_psv(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut content = lines.join("\r\n");
    content.push_str("\r\n");
    fs::write(&path, content).unwrap();
    path
}

/// ABS fixtures: (dir, postal-area file, suburb file).
pub fn abs_fixture() -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().unwrap();

    let poa = write_csv(
        dir.path(),
        "POA_2016_AUST.csv",
        &[
            "MB_CODE_2016,POA_CODE_2016,POA_NAME_2016,AREA_ALBERS_SQKM",
            "80000010000,2600,2600,0.5",
            "80000020000,2601,2601,0.3",
            "80000030000,2600,2600,0.4",
            "10000010000,2000,2000,0.1",
        ],
    );

    let ssc = write_csv(
        dir.path(),
        "SSC_2016_AUST.csv",
        &[
            "MB_CODE_2016,SSC_CODE_2016,SSC_NAME_2016,STATE_CODE_2016,STATE_NAME_2016,AREA_ALBERS_SQKM",
            "80000010000,80001,Acton (ACT),8,Australian Capital Territory,0.5",
            "80000020000,80002,Braddon,8,Australian Capital Territory,0.3",
            "80000030000,80001,Acton (ACT),8,Australian Capital Territory,0.4",
            "10000010000,10001,Sydney (North) - Inner,1,New South Wales,0.1",
            "90000010000,80003,ACT Remainder - Majura,8,Australian Capital Territory,2.0",
            "99999999999,39999,No usual address (Qld),3,Queensland,0",
        ],
    );

    (dir, poa, ssc)
}

/// Expected ABS output for [`abs_fixture`].
pub const ABS_EXPECTED: &str = "mb_code\tpost_code\tssc_name\tstate_code\n\
80000030000\t\"2600\"\t\"Acton\"\tACT\n\
80000020000\t\"2601\"\t\"Braddon\"\tACT\n\
10000010000\t\"2000\"\t\"Sydney\"\tNSW\n\
90000010000\t\"\"\t\"Majura\"\tACT\n\
99999999999\t\"\"\t\"No usual address\"\tQLD\n";

const LOCALITY_HEADER: &str = "LOCALITY_PID|DATE_CREATED|DATE_RETIRED|LOCALITY_NAME|PRIMARY_POSTCODE|LOCALITY_CLASS_CODE|STATE_PID|GNAF_LOCALITY_PID|GNAF_RELIABILITY_CODE";
const POINT_HEADER: &str = "LOCALITY_POINT_PID|DATE_CREATED|DATE_RETIRED|LOCALITY_PID|PLANIMETRIC_ACCURACY|LONGITUDE|LATITUDE";
const ADDRESS_HEADER: &str = "ADDRESS_DETAIL_PID|DATE_CREATED|LOCALITY_PID|POSTCODE";

/// G-NAF fixtures for two states (ACT and OT) plus unrelated files.
pub fn gnaf_fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    let d = dir.path();

    write_psv(
        d,
        "ACT_LOCALITY_psv.psv",
        &[
            LOCALITY_HEADER,
            "ACT570|2021-07-05||ACTON||G|8|1|5",
            "ACT571|2021-07-05||BRADDON||G|8|2|5",
            "ACT572|2021-07-05||HALL||G|8|3|5",
            "ACT999|2021-07-05||NOWHERE||G|8|4|5",
        ],
    );
    write_psv(
        d,
        "ACT_LOCALITY_POINT_psv.psv",
        &[
            POINT_HEADER,
            "LP1|2021-07-05||ACT570||149.11|-35.28",
            "LP2|2021-07-05||ACT571||149.13|-35.27",
            "LP3|2021-07-05||ACT570||0|0",
        ],
    );
    write_psv(
        d,
        "ACT_ADDRESS_DETAIL_psv.psv",
        &[
            ADDRESS_HEADER,
            "GAACT1|2021-07-05|ACT570|2601",
            "GAACT2|2021-07-05|ACT570|2600",
            "GAACT3|2021-07-05|ACT572|2618",
            "GAACT4|2021-07-05|ACT571|",
        ],
    );

    write_psv(
        d,
        "OT_LOCALITY_psv.psv",
        &[LOCALITY_HEADER, "OT001|2021-07-05||JERVIS BAY||G|9|5|5"],
    );
    write_psv(
        d,
        "OT_LOCALITY_POINT_psv.psv",
        &[POINT_HEADER, "LP9|2021-07-05||OT001||150.69|-35.13"],
    );
    write_psv(
        d,
        "OT_ADDRESS_DETAIL_psv.psv",
        &[ADDRESS_HEADER, "GAOT1|2021-07-05|OT001|2540"],
    );

    // Not a locality table; must be ignored by discovery.
    write_psv(d, "NSW_LOCALITY_POINT_psv.psv", &[POINT_HEADER]);

    dir
}

/// Expected G-NAF output for [`gnaf_fixture`].
pub const GNAF_EXPECTED: &str = "STATE\tLOCALITY_PID\tPOSTCODE\tLOCALITY_NAME\tLONGITUDE\tLATITUDE\n\
ACT\tACT570\t2600\tACTON\t149.11\t-35.28\n\
ACT\tACT572\t2618\tHALL\t\t\n\
OT\tOT001\t2540\tJERVIS BAY\t150.69\t-35.13\n";
