use super::*;
use std::io::Write;

#[test]
fn test_read_log_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "SVF2018-05-24_12:02:58.917").unwrap();
    writeln!(file, "garbage line").unwrap();
    writeln!(file, "NHR2018-05-24_12:02:49.914").unwrap();

    let records = read_log(file.path()).expect("Should read log");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].code, "SVF");
    assert_eq!(records[1].code, "NHR");
}

#[test]
fn test_read_roster_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "SVF_Sebastian Vettel_FERRARI").unwrap();
    writeln!(file, "DRR_Daniel Ricciardo_RED BULL RACING TAG HEUER").unwrap();

    let roster = read_roster(file.path()).expect("Should read roster");
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[1].full_name, "Daniel Ricciardo");
    assert_eq!(roster[1].team, "RED BULL RACING TAG HEUER");
}

#[test]
fn test_read_missing_file_is_io_error() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let missing = dir.path().join("start.log");

    match read_log(&missing) {
        Err(ReportError::Io { path, source }) => {
            assert_eq!(path, missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("Expected Io error, got {:?}", other),
    }

    assert!(matches!(
        read_roster(&missing),
        Err(ReportError::Io { .. })
    ));
}

#[test]
fn test_empty_files_yield_no_records() {
    let file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    assert!(read_log(file.path()).unwrap().is_empty());
    assert!(read_roster(file.path()).unwrap().is_empty());
}
