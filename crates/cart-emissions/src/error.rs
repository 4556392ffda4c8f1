//! Factor table error types.

use thiserror::Error;

/// Errors raised while building a custom factor table.
#[derive(Debug, Error, PartialEq)]
pub enum FactorError {
    /// The table has no `default` entry.
    #[error("factor table is missing the '{0}' entry")]
    MissingDefault(&'static str),

    /// A keyword is empty after trimming.
    #[error("factor table contains an empty keyword")]
    EmptyKeyword,

    /// The same keyword appears twice.
    #[error("duplicate factor keyword: {0}")]
    DuplicateKeyword(String),

    /// A factor is negative, NaN, or infinite.
    #[error("invalid factor for '{keyword}': {factor}")]
    InvalidFactor { keyword: String, factor: f64 },
}
