//! Error types for tree construction and cost estimation.

use thiserror::Error;

/// Errors reported by the estimator.
#[derive(Debug, Error)]
pub enum Error {
    /// The frequency table has no entries, so there is no tree to build.
    #[error("no symbols in frequency table")]
    NoSymbols,

    /// A symbol carries a count that is not a positive integer.
    #[error("invalid frequency {count} for symbol {symbol:?}")]
    InvalidFrequency { symbol: char, count: u64 },

    /// Merging two subtrees overflowed the frequency counter.
    #[error("frequency overflow while merging subtrees")]
    FrequencyOverflow,

    /// Reading an input file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for estimator operations.
pub type Result<T> = std::result::Result<T, Error>;
