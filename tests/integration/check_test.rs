//! Integration tests for check-mode validation over real files

use std::fs;

use tempfile::tempdir;

use delimit::check::{check_keyed, check_records};
use delimit::codec::CsvConfig;
use delimit::error::DelimitError;
use delimit::reader::RecordReader;

fn open_reader(
    dir: &tempfile::TempDir,
    name: &str,
    content: &str,
) -> RecordReader<delimit::BufLineSource<std::io::BufReader<fs::File>>> {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("failed to write fixture file");
    RecordReader::open(CsvConfig::default(), &path).expect("failed to open reader")
}

#[test]
fn test_clean_file_passes() {
    let dir = tempdir().unwrap();
    let reader = open_reader(&dir, "clean.csv", "a,b\nc,d\ne,f\n");

    let report = check_records(reader, 20).unwrap();
    assert!(report.is_ok());
    assert_eq!(report.total_rows, 3);
    assert_eq!(report.valid_rows, 3);
    assert_eq!(report.invalid_rows, 0);
}

#[test]
fn test_bad_rows_are_reported_with_line_numbers() {
    let dir = tempdir().unwrap();
    let reader = open_reader(&dir, "bad.csv", "a,b\n\"open\nc,d\n\"also open\n");

    let report = check_records(reader, 20).unwrap();
    assert!(!report.is_ok());
    assert_eq!(report.total_rows, 4);
    assert_eq!(report.valid_rows, 2);
    assert_eq!(report.invalid_rows, 2);

    assert_eq!(report.errors[0].line_number, 2);
    assert_eq!(report.errors[1].line_number, 4);
    assert_eq!(report.errors[0].raw.as_deref(), Some("\"open"));
}

#[test]
fn test_keyed_check_flags_column_mismatches() {
    let dir = tempdir().unwrap();
    let reader = open_reader(
        &dir,
        "keyed.csv",
        "id,name,age\n1,Alice,30\n2,Bob\n3,Carol,41\n",
    );

    let report = check_keyed(reader, 20).unwrap();
    assert_eq!(report.total_rows, 3);
    assert_eq!(report.valid_rows, 2);
    assert_eq!(report.invalid_rows, 1);
    assert_eq!(report.errors[0].line_number, 3);
    assert!(report.errors[0]
        .message
        .contains("number of columns (2) as the header (3)"));
}

#[test]
fn test_keyed_check_without_header_fails() {
    let dir = tempdir().unwrap();
    let reader = open_reader(&dir, "empty.csv", "");
    assert!(matches!(
        check_keyed(reader, 20),
        Err(DelimitError::MissingHeader)
    ));
}

#[test]
fn test_sample_cap_truncates_but_counts_everything() {
    let dir = tempdir().unwrap();
    let reader = open_reader(&dir, "many.csv", "\"a\n\"b\n\"c\n\"d\nok\n");

    let report = check_records(reader, 2).unwrap();
    assert_eq!(report.invalid_rows, 4);
    assert_eq!(report.valid_rows, 1);
    assert_eq!(report.errors.len(), 2);
    assert!(report.truncated);
    assert!(report.to_string().contains("further errors omitted"));
}

#[test]
fn test_report_renders_raw_line() {
    let dir = tempdir().unwrap();
    let reader = open_reader(&dir, "raw.csv", "ok\n\"busted,row\n");

    let report = check_records(reader, 20).unwrap();
    let rendered = report.to_string();
    assert!(rendered.contains("checked 2 rows: 1 valid, 1 invalid"));
    assert!(rendered.contains("line 2:"));
    assert!(rendered.contains("busted,row"));
}
