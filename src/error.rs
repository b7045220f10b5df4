use std::path::PathBuf;

use thiserror::Error;

/// Errors returned while loading points, counting boxes or writing reports.
#[derive(Debug, Error)]
pub enum BoxDimError {
    /// The data or report file could not be opened, read or written.
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from an in-memory or already opened stream failed.
    #[error("i/o error: {0}")]
    Stream(#[from] std::io::Error),

    /// A data row holds a value that is not a finite number.
    #[error("line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    /// A data row has a different number of columns than expected.
    #[error("line {line}: expected {expected} columns, got {got}")]
    ColumnCount {
        line: usize,
        expected: usize,
        got: usize,
    },

    /// The maximum grid resolution must be at least 1.
    #[error("invalid resolution {0}: must be a positive integer")]
    InvalidResolution(usize),

    /// The bounding half-extent must be positive and finite.
    #[error("invalid maxsize {0}: must be positive and finite")]
    InvalidMaxsize(f64),

    /// A point array must have exactly two columns.
    #[error("point array must have shape (n, 2), got {0:?}")]
    InvalidShape(Vec<usize>),
}

pub type Result<T> = std::result::Result<T, BoxDimError>;
