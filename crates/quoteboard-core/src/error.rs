use thiserror::Error;

/// Validation errors exposed by `quoteboard-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,

    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },
}

/// Failures of a whole refresh cycle, outside the per-symbol loop.
///
/// Per-symbol transport failures are not errors at this level; the
/// classifier folds them into `error` rows and the cycle keeps going.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("refresh cycle requires at least one symbol")]
    EmptyWatchlist,
}
