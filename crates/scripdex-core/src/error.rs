use thiserror::Error;

/// Validation and contract errors exposed by `scripdex-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter: '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("security name cannot be empty")]
    EmptySecurityName,

    #[error("invalid market '{value}', expected one of domestic, foreign")]
    InvalidMarket { value: String },

    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },

    #[error("catalog version cannot be empty")]
    EmptyCatalogVersion,
    #[error("duplicate security '{symbol}' in {market} partition")]
    DuplicateSecurity { symbol: String, market: String },

    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("schema_version must match vMAJOR.MINOR.PATCH: '{value}'")]
    InvalidSchemaVersion { value: String },

    #[error("error code cannot be empty")]
    EmptyErrorCode,
    #[error("error message cannot be empty")]
    EmptyErrorMessage,
}

/// Search call contract violations.
///
/// A query that matches nothing is a normal empty result, not an error, so
/// the only violation here is a caller bug that must not be masked.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("search limit must be greater than zero, got {limit}")]
    InvalidLimit { limit: usize },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("catalog io error: {0}")]
    Io(#[from] std::io::Error),
}
