//! Two-column text reader.

use super::{DataPoint, Dataset};
use crate::error::{Result, XyPlotError};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

/// Whitespace-separated `x y` reader.
#[derive(Debug)]
pub struct DataReader;

impl DataReader {
    /// Read a data file.
    ///
    /// The file is closed before this returns, whether parsing succeeds or not.
    pub fn read_file(path: &Path) -> Result<Dataset> {
        let file = File::open(path).map_err(|e| XyPlotError::file_open(path, e))?;
        let dataset = Self::read_from(BufReader::new(file), path)?;

        tracing::info!(
            "Read {} points from {}",
            dataset.len(),
            path.display()
        );

        Ok(dataset)
    }

    /// Read points from any buffered source, labelling the result with `path`.
    pub fn read_from<R: BufRead>(reader: R, path: &Path) -> Result<Dataset> {
        let mut points = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| match e.kind() {
                ErrorKind::InvalidData => XyPlotError::invalid_encoding(idx + 1),
                _ => XyPlotError::Io(e),
            })?;
            if let Some(point) = parse_line(idx + 1, &line)? {
                points.push(point);
            }
        }

        tracing::debug!("Parsed {} points", points.len());
        Ok(Dataset::new(path, points))
    }

    /// Parse in-memory text.
    pub fn parse_str(text: &str) -> Result<Dataset> {
        Self::read_from(text.as_bytes(), Path::new("<memory>"))
    }
}

/// Parse one line into a point.
///
/// Returns `Ok(None)` for a blank line. `line_no` is 1-based and only used
/// for error reporting.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<DataPoint>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens.as_slice() {
        [] => Ok(None),
        [x, y] => {
            let x = parse_value(line_no, x)?;
            let y = parse_value(line_no, y)?;
            Ok(Some(DataPoint::new(x, y)))
        },
        _ => Err(XyPlotError::token_count(line_no, tokens.len(), line.trim())),
    }
}

fn parse_value(line_no: usize, token: &str) -> Result<f64> {
    token
        .parse::<f64>()
        .map_err(|e| XyPlotError::invalid_number(line_no, token, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_pairs_in_order() {
        let ds = DataReader::parse_str("1 2\n3 4\n5 6\n").unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.xs(), vec![1.0, 3.0, 5.0]);
        assert_eq!(ds.ys(), vec![2.0, 4.0, 6.0]);
    }

    #[test]
    fn accepts_mixed_whitespace_and_notation() {
        let ds = DataReader::parse_str("  1.5\t-2e3\n0.25    0.5\r\n").unwrap();
        assert_eq!(ds.points(), &[DataPoint::new(1.5, -2000.0), DataPoint::new(0.25, 0.5)]);
    }

    #[test]
    fn missing_trailing_newline() {
        let ds = DataReader::parse_str("1 2\n3 4").unwrap();
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let ds = DataReader::parse_str("1 2\n\n   \n3 4\n").unwrap();
        assert_eq!(ds.xs(), vec![1.0, 3.0]);
    }

    #[test]
    fn empty_input_is_empty_dataset() {
        let ds = DataReader::parse_str("").unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn single_token_is_parse_error() {
        let err = DataReader::parse_str("1\n").unwrap_err();
        assert!(err.is_parse());
        assert!(matches!(
            err,
            XyPlotError::TokenCount { line: 1, found: 1, .. }
        ));
    }

    #[test]
    fn extra_token_is_parse_error() {
        let err = DataReader::parse_str("1 2\n3 4 5\n").unwrap_err();
        assert!(matches!(
            err,
            XyPlotError::TokenCount { line: 2, found: 3, .. }
        ));
    }

    #[test]
    fn non_numeric_token_is_parse_error() {
        let err = DataReader::parse_str("1 2\n3 four\n").unwrap_err();
        match err {
            XyPlotError::InvalidNumber { line, token, .. } => {
                assert_eq!(line, 2);
                assert_eq!(token, "four");
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_utf8_is_parse_error_with_line() {
        let err = DataReader::read_from(&b"1 2\n3 \xff\n"[..], Path::new("bad.dat")).unwrap_err();
        assert!(err.is_parse());
        assert!(!err.is_io());
        assert!(matches!(err, XyPlotError::InvalidEncoding { line: 2 }));
        assert_eq!(err.to_string(), "Line 2: not valid UTF-8 text");
    }

    #[test]
    fn special_floats_parse() {
        let p = parse_line(1, "inf NaN").unwrap().unwrap();
        assert!(p.x.is_infinite());
        assert!(p.y.is_nan());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DataReader::read_file(&dir.path().join("absent.dat")).unwrap_err();
        assert!(err.is_io());
        assert!(matches!(err, XyPlotError::FileOpen { .. }));
    }

    #[test]
    fn reading_twice_is_identical() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0 0\n1 1\n2 4\n3 9").unwrap();

        let first = DataReader::read_file(file.path()).unwrap();
        let second = DataReader::read_file(file.path()).unwrap();
        assert_eq!(first.xs(), second.xs());
        assert_eq!(first.ys(), second.ys());
        assert_eq!(first.len(), 4);
        assert_eq!(first.file_path(), file.path());
    }
}
