//! Integration tests for reading iView exports from disk
//!
//! These tests write export files to temporary locations and read them back
//! through the public API, the same way the command line tool does.

use gazehound::app::adapters::filesystem::read_lines;
use gazehound::{
    DelimitedReader, Error, HeaderValue, IViewReader, ParseOverrides, ReaderConfig, Result,
};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// A 60 Hz recording with Windows line endings, as written by iView
const IVIEW_EXPORT: &str = "## [iView]\r\n\
## Converted from:\tC:\\iView\\data\\sub01.idf\r\n\
#FileVersion:\t2\r\n\
#Fileformat:\t0\r\n\
#Subject:\tsub01\r\n\
#Date:\t04.03.2008 14:27:04\r\n\
#Description:\tfree viewing\r\n\
## of Pts Recorded:\t4\r\n\
#Offset Of Calibration Area:\t0\t0\r\n\
#Size Of Calibration Area:\t800\t600\r\n\
#Sample Rate:\t60\r\n\
\r\n\
0\t0\t412\t287\t1\r\n\
17\t0\t415\t290\t1\r\n\
33\t0\t418\t288\t1\r\n\
50\t0\t420\t291\t1\r\n";

fn write_export(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}

#[test]
fn test_read_iview_export_from_disk() {
    let file = write_export(IVIEW_EXPORT);
    let mut reader = IViewReader::from_path(file.path(), ReaderConfig::default()).unwrap();

    let header = reader.header().unwrap();
    assert_eq!(header.file_version(), Some("2"));
    assert_eq!(header.text("subject"), Some("sub01"));
    assert_eq!(header.recorded_points(), Some(4));
    assert_eq!(header.calibration_offset(), Some(&[0, 0][..]));
    assert_eq!(header.calibration_size(), Some(&[800, 600][..]));
    assert_eq!(header.sample_rate(), Some(60));

    assert_eq!(reader.len(), 4);
    let rows = reader.by_ref().collect::<Result<Vec<_>>>().unwrap();
    assert_eq!(rows.len() as i64, header.recorded_points().unwrap());
    assert_eq!(rows[3], vec!["50", "0", "420", "291", "1"]);
}

#[test]
fn test_end_to_end_minimal_lines() {
    let lines = vec!["#FileVersion:\t1.0", "#Sample Rate:\t60", "", "x1\ty1", "x2\ty2"];
    let mut reader = IViewReader::with_defaults(lines);

    let header = reader.header().unwrap();
    let expected: Vec<(&str, HeaderValue)> = vec![
        ("file_version", HeaderValue::Text("1.0".to_string())),
        ("sample_rate", HeaderValue::Integer(60)),
    ];
    assert_eq!(header.iter().map(|(k, v)| (k, v.clone())).collect::<Vec<_>>(), expected);

    let rows = reader.by_ref().collect::<Result<Vec<_>>>().unwrap();
    assert_eq!(rows, vec![vec!["x1", "y1"], vec!["x2", "y2"]]);
    assert!(reader.next().is_none());
}

#[test]
fn test_comma_separated_export() {
    let file = write_export("#Subject:\tabc\n#Note:\tcomma file\n1,2\n3,4\n");
    let config = ReaderConfig::default().with_overrides(&ParseOverrides::default().with_delimiter(','));
    let mut reader = DelimitedReader::from_path(file.path(), config).unwrap();

    assert_eq!(reader.comment_lines().len(), 2);
    let rows = reader.by_ref().collect::<Result<Vec<_>>>().unwrap();
    assert_eq!(rows, vec![vec!["1", "2"], vec!["3", "4"]]);
}

#[test]
fn test_bad_sample_rate_is_reported() {
    let file = write_export("#Sample Rate:\tsixty\n1\t2\n");
    let reader = IViewReader::from_path(file.path(), ReaderConfig::default()).unwrap();

    let error = reader.header().unwrap_err();
    assert!(matches!(error, Error::HeaderConversion { .. }));
    assert!(error.to_string().contains("sixty"));
}

#[test]
fn test_comment_only_file() {
    let file = write_export("#FileVersion:\t2\n\n#Sample Rate:\t50\n");
    let mut reader = IViewReader::from_path(file.path(), ReaderConfig::default()).unwrap();

    assert_eq!(reader.header().unwrap().sample_rate(), Some(50));
    assert_eq!(reader.len(), 0);
    assert!(reader.next().is_none());
}

#[test]
fn test_missing_file() {
    let result = IViewReader::from_path(
        Path::new("/nonexistent/gazehound/sub01.txt"),
        ReaderConfig::default(),
    );
    assert!(matches!(result, Err(Error::Io { .. })));
    assert!(read_lines(Path::new("/nonexistent/gazehound/sub01.txt")).is_err());
}

#[test]
fn test_rows_without_skipping_comments() {
    let file = write_export("#FileVersion:\t1.0\n#Sample Rate:\t60\n\nx1\ty1\nx2\ty2\n");
    let config = ReaderConfig::default().with_skip_comments(false);
    let mut reader = IViewReader::from_path(file.path(), config).unwrap();

    assert_eq!(reader.header().unwrap().sample_rate(), Some(60));
    let len = reader.len();
    let rows = reader.by_ref().collect::<Result<Vec<_>>>().unwrap();
    assert_eq!(len, 5);
    assert_eq!(rows.len(), len);
    assert_eq!(rows[2], Vec::<String>::new());
}
