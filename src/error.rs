//! Reasons the input could not be turned into the output file.
//!
//! Every variant is recovered by writing the sample dataset instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FallbackError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("input has no header row")]
    NoHeaders,

    #[error("input has no data rows")]
    NoRows,

    #[error("line {line}: expected {expected} fields, found {found}")]
    TooManyFields {
        line: u64,
        expected: usize,
        found: usize,
    },
}

pub type FallbackResult<T> = Result<T, FallbackError>;
