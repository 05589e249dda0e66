//! End-to-end tests for the batch pipeline over real partition files.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use addr_core::run_pipeline;
use addr_model::{CleanupRule, RunConfig};
use polars::prelude::DataFrame;

const HEADER: &str =
    "OBJECTID,AddrNum,NumSuf,PreDir,StreetName,PostType,Building,Unit,PlaceName,County,Zipcode,location";

fn write_partition(dir: &Path, key: &str, rows: &[&str]) {
    let mut body = String::from(HEADER);
    for row in rows {
        body.push('\n');
        body.push_str(row);
    }
    body.push('\n');
    fs::write(dir.join(format!("addresses_{key}.csv")), body).expect("write partition");
}

fn str_at(df: &DataFrame, column: &str, idx: usize) -> String {
    df.column(column)
        .expect("column")
        .get(idx)
        .expect("row")
        .to_string()
        .trim_matches('"')
        .to_string()
}

fn id_at(df: &DataFrame, idx: usize) -> i64 {
    df.column("id")
        .expect("id column")
        .get(idx)
        .expect("row")
        .try_extract::<i64>()
        .expect("numeric id")
}

#[test]
fn canonicalizes_fixture_row_end_to_end() {
    let dir = TempDir::new().expect("temp dir");
    write_partition(
        dir.path(),
        "80015",
        &[
            "7,22959,<Null>,E,SMOKY HILL,RD,E,APT E101,AURORA,ARAPAHOE,80015,POINT (-104.7 39.6)",
        ],
    );

    let config = RunConfig::new(dir.path()).with_partitions(["80015".to_string()]);
    let run = run_pipeline(&config).expect("run").expect("some output");

    assert_eq!(run.frame.height(), 1);
    assert_eq!(id_at(&run.frame, 0), 7);
    assert_eq!(
        str_at(&run.frame, "address", 0),
        "22959 E Smoky Hill Rd, Bldg E Apt E101"
    );
    assert_eq!(str_at(&run.frame, "city", 0), "AURORA");
    assert_eq!(str_at(&run.frame, "county", 0), "ARAPAHOE");
    assert_eq!(str_at(&run.frame, "zipcode", 0), "80015");
    assert_eq!(str_at(&run.frame, "location", 0), "POINT (-104.7 39.6)");
    assert_eq!(run.summary.rows_loaded, 1);
    assert_eq!(run.summary.rows_output, 1);
}

#[test]
fn missing_partition_is_skipped() {
    let dir = TempDir::new().expect("temp dir");
    write_partition(
        dir.path(),
        "80015",
        &["1,100,,,MAIN,ST,,,AURORA,,80015,"],
    );

    let config = RunConfig::new(dir.path())
        .with_partitions(["80015".to_string(), "99999".to_string()]);
    let run = run_pipeline(&config).expect("run").expect("some output");

    assert_eq!(run.summary.partitions_loaded, vec!["80015"]);
    assert_eq!(run.summary.partitions_missing, vec!["99999"]);
    assert_eq!(run.frame.height(), 1);
    assert_eq!(str_at(&run.frame, "address", 0), "100 Main St");
}

#[test]
fn zero_partitions_found_is_a_noop() {
    let dir = TempDir::new().expect("temp dir");
    let config = RunConfig::new(dir.path())
        .with_partitions(["80015".to_string(), "80016".to_string()]);
    assert!(run_pipeline(&config).expect("run").is_none());
}

#[test]
fn partitions_concatenate_in_configured_order_keeping_ids() {
    let dir = TempDir::new().expect("temp dir");
    // Same upstream identifier in both partitions; both rows survive.
    write_partition(dir.path(), "80015", &["5,100,,,MAIN,ST,,,AURORA,,80015,"]);
    write_partition(dir.path(), "80016", &["5,200,,,OAK,AVE,,,AURORA,,80016,"]);

    let config = RunConfig::new(dir.path())
        .with_partitions(["80016".to_string(), "80015".to_string()]);
    let run = run_pipeline(&config).expect("run").expect("some output");

    assert_eq!(run.frame.height(), 2);
    assert_eq!(id_at(&run.frame, 0), 5);
    assert_eq!(id_at(&run.frame, 1), 5);
    assert_eq!(str_at(&run.frame, "address", 0), "200 Oak Ave");
    assert_eq!(str_at(&run.frame, "address", 1), "100 Main St");
}

#[test]
fn rows_missing_required_fields_are_dropped() {
    let dir = TempDir::new().expect("temp dir");
    write_partition(
        dir.path(),
        "80015",
        &[
            "1,100,,,MAIN,ST,,,AURORA,,80015,",
            "2,101,,,MAIN,ST,,,,,80015,",
            "3,,,,MAIN,ST,,,AURORA,,80015,",
        ],
    );

    let config = RunConfig::new(dir.path()).with_partitions(["80015".to_string()]);
    let run = run_pipeline(&config).expect("run").expect("some output");

    assert_eq!(run.summary.rows_loaded, 3);
    assert_eq!(run.summary.rows_after_required, 1);
    assert_eq!(run.frame.height(), 1);
    assert_eq!(id_at(&run.frame, 0), 1);
}

#[test]
fn exclusion_rule_removes_rows_before_validation() {
    let dir = TempDir::new().expect("temp dir");
    // The JUNK row has a non-numeric identifier and would abort the run
    // if it reached validation.
    write_partition(
        dir.path(),
        "80015",
        &[
            "1,100,,,MAIN,ST,,,AURORA,,80015,",
            "bad-id,101,,,MAIN,ST,,,JUNK,,80015,",
        ],
    );

    let config = RunConfig::new(dir.path())
        .with_partitions(["80015".to_string()])
        .with_rules([CleanupRule::exclude("PlaceName", "JUNK")]);
    let run = run_pipeline(&config).expect("run").expect("some output");

    assert_eq!(run.summary.rows_after_rules, 1);
    assert_eq!(run.frame.height(), 1);
    assert_eq!(id_at(&run.frame, 0), 1);
}

#[test]
fn replace_rule_rewrites_output_city() {
    let dir = TempDir::new().expect("temp dir");
    write_partition(
        dir.path(),
        "80015",
        &["1,100,,,MAIN,ST,,,SPRINGS,,80015,"],
    );

    let config = RunConfig::new(dir.path())
        .with_partitions(["80015".to_string()])
        .with_rules([CleanupRule::replace("PlaceName", "SPRINGS", "Springs")]);
    let run = run_pipeline(&config).expect("run").expect("some output");

    assert_eq!(str_at(&run.frame, "city", 0), "Springs");
}

#[test]
fn invalid_row_aborts_the_whole_run() {
    let dir = TempDir::new().expect("temp dir");
    write_partition(
        dir.path(),
        "80015",
        &[
            "1,100,,,MAIN,ST,,,AURORA,,80015,",
            "not-a-number,101,,,OAK,AVE,,,AURORA,,80015,",
        ],
    );

    let config = RunConfig::new(dir.path()).with_partitions(["80015".to_string()]);
    let error = run_pipeline(&config).expect_err("run must abort");
    assert!(error.to_string().contains("row 1"), "{error:#}");
}

#[test]
fn sentinel_in_required_field_reaches_the_validator() {
    let dir = TempDir::new().expect("temp dir");
    // "<Null>" is populated text, so the required-field filter keeps the
    // row; the validator then rejects it as a missing street name.
    write_partition(
        dir.path(),
        "80015",
        &["1,100,,,<Null>,ST,,,AURORA,,80015,"],
    );

    let config = RunConfig::new(dir.path()).with_partitions(["80015".to_string()]);
    assert!(run_pipeline(&config).is_err());
}
