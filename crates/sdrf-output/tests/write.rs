//! Writing SDRF files to disk.

use std::fs;

use polars::prelude::*;
use sdrf_output::{DEFAULT_OUTPUT_NAME, OutputError, TsvOptions, write_sdrf_tsv};

#[test]
fn writes_into_nested_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join(DEFAULT_OUTPUT_NAME);
    let df = df!(
        "source name" => &["sample 1"],
        "characteristics[disease]" => &["normal"],
    )
    .unwrap();

    let written = write_sdrf_tsv(&df, &path, &TsvOptions::default()).unwrap();
    assert_eq!(written, path);
    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "source name\tcharacteristics[disease]\nsample 1\tnormal\n"
    );
}

#[test]
fn values_with_tabs_are_quoted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quoted.sdrf.tsv");
    let df = df!("comment[label]" => &["a\tb"]).unwrap();

    write_sdrf_tsv(&df, &path, &TsvOptions::default()).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "comment[label]\n\"a\tb\"\n");
}

#[test]
fn unwritable_path_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    fs::write(&blocker, "x").unwrap();
    let df = df!("source name" => &["s"]).unwrap();

    let err = write_sdrf_tsv(&df, &blocker.join("out.tsv"), &TsvOptions::default()).unwrap_err();
    assert!(matches!(err, OutputError::CreateDir { .. } | OutputError::CreateFile { .. }));
}
