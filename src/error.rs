//! Error types for xyplot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for xyplot operations.
pub type Result<T> = std::result::Result<T, XyPlotError>;

/// Errors that can occur in xyplot.
#[derive(Debug, Error)]
pub enum XyPlotError {
    /// Failed to open the input file.
    #[error("Failed to open file: {}", path.display())]
    FileOpen {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A line did not contain exactly two tokens.
    #[error("Line {line}: expected 2 values, found {found}: {content:?}")]
    TokenCount {
        /// 1-based line number.
        line: usize,
        /// Number of tokens found.
        found: usize,
        /// The offending line.
        content: String,
    },

    /// A token was not a floating-point number.
    #[error("Line {line}: invalid number {token:?}")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        token: String,
        /// Underlying parse error.
        #[source]
        source: ParseFloatError,
    },

    /// A line was not valid UTF-8.
    #[error("Line {line}: not valid UTF-8 text")]
    InvalidEncoding {
        /// 1-based line number.
        line: usize,
    },
}

impl XyPlotError {
    /// Create a FileOpen error.
    pub fn file_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a TokenCount error.
    pub fn token_count(line: usize, found: usize, content: impl Into<String>) -> Self {
        Self::TokenCount {
            line,
            found,
            content: content.into(),
        }
    }

    /// Create an InvalidNumber error.
    pub fn invalid_number(line: usize, token: impl Into<String>, source: ParseFloatError) -> Self {
        Self::InvalidNumber {
            line,
            token: token.into(),
            source,
        }
    }

    /// Create an InvalidEncoding error.
    pub fn invalid_encoding(line: usize) -> Self {
        Self::InvalidEncoding { line }
    }

    /// Whether this error came from malformed file content.
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            Self::TokenCount { .. } | Self::InvalidNumber { .. } | Self::InvalidEncoding { .. }
        )
    }

    /// Whether this error came from the filesystem or terminal.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::FileOpen { .. } | Self::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_errors() {
        let io = XyPlotError::file_open(
            "missing.dat",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(io.is_io());
        assert!(!io.is_parse());

        let count = XyPlotError::token_count(3, 1, "1");
        assert!(count.is_parse());
        assert_eq!(count.to_string(), "Line 3: expected 2 values, found 1: \"1\"");

        let source = "abc".parse::<f64>().unwrap_err();
        let num = XyPlotError::invalid_number(7, "abc", source);
        assert!(num.is_parse());
        assert!(num.to_string().starts_with("Line 7: invalid number"));

        let encoding = XyPlotError::invalid_encoding(4);
        assert!(encoding.is_parse());
        assert!(!encoding.is_io());
    }

    #[test]
    fn file_open_message_names_path() {
        let err = XyPlotError::file_open(
            "/nowhere/xy.dat",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.to_string(), "Failed to open file: /nowhere/xy.dat");
    }
}
