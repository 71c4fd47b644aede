//! Integration tests for ozinfo table reading.

use std::path::Path;

use tempfile::TempDir;

use ozinfo_ingest::{IngestError, read_ozinfo};

const OZINFO: &str = "\
!  sensor/instr/sat   lev  use   gross    error    b_oz  pg_oz
 sbuv2_n19             1    1    30.000   3.000   0.000  0.000
 sbuv2_n19             2    1    30.000   3.000   0.000  0.000
 sbuv2_n19             3   -1    30.000   3.000   0.000  0.000
 omi_aura              1    1    10.000   5.000   0.000  0.000
 gome_metop-b          1   -1    10.000   5.000   0.000  0.000
 mls55_aura            8    1    10.000   5.000   0.000  0.000
";

fn write_ozinfo(contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("global_ozinfo.txt");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn parsed_sequences_have_equal_length() {
    let (_dir, path) = write_ozinfo(OZINFO);
    let table = read_ozinfo(&path).unwrap();

    assert_eq!(table.len(), 6);
    assert_eq!(table.sensors().len(), 6);
    assert_eq!(table.layers().len(), 6);
    assert_eq!(table.usages().len(), 6);
    assert_eq!(table.usages(), vec![1, 1, -1, 1, -1, 1]);
}

#[test]
fn levels_are_normalized_across_sensors() {
    let (_dir, path) = write_ozinfo(OZINFO);
    let table = read_ozinfo(&path).unwrap();

    // sbuv2 3 -> omi 1 zeroes the sbuv2 total column; single-layer sensors
    // followed by a non-increasing level collapse to 0; the last row is kept.
    assert_eq!(table.layers(), vec![1, 2, 0, 0, 1, 8]);
}

#[test]
fn rows_after_short_row_are_excluded() {
    let contents = "\
 omi_aura 1 1
 sbuv2_n19 1
 gome_metop-b 1 1
";
    let (_dir, path) = write_ozinfo(contents);
    let table = read_ozinfo(&path).unwrap();

    assert_eq!(table.sensors(), vec!["omi_aura"]);
    assert_eq!(table.layers(), vec![1]);
}

#[test]
fn missing_table_is_an_error() {
    let err = read_ozinfo(Path::new("/nonexistent/ozinfo.txt")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn comment_only_table_is_empty() {
    let (_dir, path) = write_ozinfo("! nothing here\n! still nothing\n");
    let table = read_ozinfo(&path).unwrap();
    assert!(table.is_empty());
}
