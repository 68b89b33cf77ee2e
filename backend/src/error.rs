//! Error types for the recordshape transform.
//!
//! Errors are layered the same way the transform is:
//!
//! - [`CsvError`] - reading and parsing the source CSV
//! - [`OutputError`] - serializing and writing the JSON document
//! - [`TransformError`] - top-level error returned by [`crate::RecordTransformer`]
//!
//! Every error maps onto one of three [`ErrorKind`]s, which is what callers
//! are expected to branch on. Conversion is automatic via `From`, so `?`
//! works across layers.

use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// Error Kinds
// =============================================================================

/// Coarse classification of every failure the transform can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source CSV does not exist.
    FileNotFound,
    /// The source CSV is not well formed (cell count, encoding, quoting).
    MalformedInput,
    /// Reading the source or writing the output failed.
    Io,
}

// =============================================================================
// CSV Errors
// =============================================================================

/// Errors while reading the source CSV.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Source path does not exist.
    #[error("Source file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Source exists but could not be read.
    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content is not valid UTF-8.
    #[error("Line {line}: invalid encoding: {message}")]
    InvalidEncoding { line: u64, message: String },

    /// A data row does not have as many cells as the header.
    #[error("Line {line}: expected {expected} cells (header), found {found}")]
    RowLength {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// Any other CSV syntax problem.
    #[error("Line {line}: invalid CSV: {message}")]
    Parse { line: u64, message: String },
}

impl CsvError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CsvError::FileNotFound { .. } => ErrorKind::FileNotFound,
            CsvError::Read { .. } => ErrorKind::Io,
            CsvError::InvalidEncoding { .. }
            | CsvError::RowLength { .. }
            | CsvError::Parse { .. } => ErrorKind::MalformedInput,
        }
    }
}

// =============================================================================
// Output Errors
// =============================================================================

/// Errors while writing the JSON document.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Could not create the staging file next to the target.
    #[error("Cannot create output for '{}': {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the staged document failed.
    #[error("Cannot write output '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Moving the staged file over the target failed.
    #[error("Cannot replace '{}': {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Transform Errors (top-level)
// =============================================================================

/// Top-level error returned by [`crate::RecordTransformer`].
#[derive(Debug, Error)]
pub enum TransformError {
    /// Reading the source failed.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Writing the document failed.
    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

impl TransformError {
    /// The coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TransformError::Csv(e) => e.kind(),
            TransformError::Output(_) => ErrorKind::Io,
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Result type for the transform.
pub type TransformResult<T> = Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let csv_err = CsvError::RowLength {
            line: 4,
            expected: 3,
            found: 2,
        };
        let err: TransformError = csv_err.into();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        assert!(err.to_string().contains("Line 4"));

        let out_err = OutputError::Write {
            path: PathBuf::from("out.json"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        let err: TransformError = out_err.into();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_csv_error_kinds() {
        let missing = CsvError::FileNotFound {
            path: PathBuf::from("nope.csv"),
        };
        assert_eq!(missing.kind(), ErrorKind::FileNotFound);
        assert!(missing.to_string().contains("nope.csv"));

        let encoding = CsvError::InvalidEncoding {
            line: 1,
            message: "UTF-16 LE byte order mark".into(),
        };
        assert_eq!(encoding.kind(), ErrorKind::MalformedInput);

        let read = CsvError::Read {
            path: PathBuf::from("dir.csv"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "is a directory"),
        };
        assert_eq!(read.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_row_length_format() {
        let err = CsvError::RowLength {
            line: 12,
            expected: 34,
            found: 33,
        };
        let msg = err.to_string();
        assert!(msg.contains("Line 12"));
        assert!(msg.contains("34"));
        assert!(msg.contains("33"));
    }
}
