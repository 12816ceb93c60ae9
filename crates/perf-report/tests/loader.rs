// File: crates/perf-report/tests/loader.rs
// Purpose: Table loading, missing-value normalization and row filters.

use std::path::{Path, PathBuf};

use perf_report::table::coerce_number;
use perf_report::{ReportError, RowFilter, Table};

fn fixture(name: &str, body: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("loader");
    std::fs::create_dir_all(&dir).expect("fixture dir");
    let path = dir.join(name);
    std::fs::write(&path, body).expect("write fixture");
    path
}

#[test]
fn na_and_empty_cells_are_missing() {
    let path = fixture("na.csv", "VUs,2024 Local,2024 Remote\n10,100,NA\n50,,0\n");
    let t = Table::load(&path).expect("load");
    assert_eq!(t.len(), 2);
    assert_eq!(t.column("2024 Local").unwrap(), &[Some(100.0), None]);
    // a literal zero stays zero; only markers become missing
    assert_eq!(t.column("2024 Remote").unwrap(), &[None, Some(0.0)]);
}

#[test]
fn non_numeric_cell_is_missing_and_row_survives() {
    let path = fixture("abc.csv", "VUs,a,b\n1,abc,2.5\n5,3,4\n");
    let t = Table::load(&path).expect("load");
    assert_eq!(t.len(), 2);
    let row = t.row(0).unwrap();
    assert_eq!(row.index(), Some("1"));
    assert_eq!(row.get("a"), None);
    assert_eq!(row.get("b"), Some(2.5));
    assert_eq!(t.row(1).unwrap().get("a"), Some(3.0));
}

#[test]
fn coercion_is_fail_soft_per_cell() {
    assert_eq!(coerce_number("42"), Some(42.0));
    assert_eq!(coerce_number(" 1e3 "), Some(1000.0));
    assert_eq!(coerce_number("NA"), None);
    assert_eq!(coerce_number(""), None);
    assert_eq!(coerce_number("n/a"), None);
    assert_eq!(coerce_number("inf"), None);
    assert_eq!(coerce_number("NaN"), None);
}

#[test]
fn first_column_keeps_text() {
    let path = fixture("versions.csv", "Version,Local Max VUs\n  v1.2.0 ,300\nv2.0.0,NA\n");
    let t = Table::load(&path).expect("load");
    assert_eq!(t.index_name(), "Version");
    assert_eq!(t.index_label(0), Some("  v1.2.0 "));
    assert!(matches!(t.index_value(0), Err(ReportError::NonNumericIndex { row: 0, .. })));
    assert_eq!(t.series_names(), &["Local Max VUs".to_string()]);
}

#[test]
fn missing_file_is_not_found() {
    let err = Table::load(Path::new("definitely/not/here.csv")).unwrap_err();
    assert!(err.is_not_found(), "got {err:?}");
    assert!(err.to_string().contains("here.csv"));
}

#[test]
fn ragged_rows_are_parse_errors() {
    let path = fixture("ragged.csv", "VUs,a\n1,2,3\n");
    let err = Table::load(&path).unwrap_err();
    assert!(matches!(err, ReportError::Parse { .. }), "got {err:?}");
    assert!(!err.is_not_found());
}

#[test]
fn empty_file_has_no_header() {
    let path = fixture("empty.csv", "");
    let err = Table::load(&path).unwrap_err();
    assert!(matches!(err, ReportError::MissingHeader(_)), "got {err:?}");
}

#[test]
fn header_only_table_is_empty() {
    let path = fixture("header_only.csv", "VUs,2024 Local\n");
    let t = Table::load(&path).expect("load");
    assert!(t.is_empty());
    assert!(t.has_column("2024 Local"));
}

#[test]
fn drop_last_filter_trims_trailing_rows() {
    let path = fixture("drop.csv", "VUs,a\n1,1\n2,2\n3,3\n4,4\n");
    let mut t = Table::load(&path).expect("load");
    RowFilter::DropLast(2).apply(&mut t);
    assert_eq!(t.len(), 2);
    assert_eq!(t.column("a").unwrap(), &[Some(1.0), Some(2.0)]);
    assert!(t.row(2).is_none());

    RowFilter::DropLast(10).apply(&mut t);
    assert!(t.is_empty());
}
