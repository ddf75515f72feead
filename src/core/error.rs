//! Error types for FastGFF3
//!
//! Defines all error types used throughout the library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for FastGFF3 operations
#[derive(Debug, Error)]
pub enum Gff3Error {
    /// Malformed record in a named input file
    #[error("Malformed GFF3 file {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// Malformed record in in-memory input
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Gene list resolution errors
    #[error("Gene list error: {0}")]
    GeneList(#[from] GeneListError),

    /// Worker pool could not be created
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while parsing GFF3 feature lines
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A feature line did not have exactly nine tab-separated columns
    #[error("Wrong number of fields at line {line}: expected {expected}, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Start or end column is not an unsigned integer
    #[error("Invalid {field} '{value}' at line {line}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    /// First column is empty
    #[error("Empty chromosome name at line {line}")]
    EmptyChromosome { line: usize },
}

impl ParseError {
    /// Line number (1-based) of the offending input line
    pub fn line(&self) -> usize {
        match self {
            ParseError::FieldCount { line, .. }
            | ParseError::InvalidNumber { line, .. }
            | ParseError::EmptyChromosome { line } => *line,
        }
    }
}

/// Errors that can occur while reading a gene list
#[derive(Debug, Error)]
pub enum GeneListError {
    /// A multi-column line has no value at the configured column
    #[error("Gene list line {line} has {found} columns, column {column} requested")]
    ColumnOutOfRange {
        line: usize,
        column: usize,
        found: usize,
    },

    /// I/O error while reading the list
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for FastGFF3 operations
pub type Result<T> = std::result::Result<T, Gff3Error>;

/// Result type alias for line parsing
pub type ParseResult<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_line() {
        let err = ParseError::FieldCount { line: 7, expected: 9, found: 5 };
        assert_eq!(err.line(), 7);
        assert_eq!(
            err.to_string(),
            "Wrong number of fields at line 7: expected 9, found 5"
        );
    }

    #[test]
    fn test_malformed_reports_path() {
        let err = Gff3Error::Malformed {
            path: PathBuf::from("annot.gff3"),
            source: ParseError::EmptyChromosome { line: 3 },
        };
        let msg = err.to_string();
        assert!(msg.contains("annot.gff3"));
        assert!(msg.contains("line 3"));
    }
}
