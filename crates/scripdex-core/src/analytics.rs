//! Boundary to the out-of-process analytics service.
//!
//! Once a caller settles on a security, the follow-up price/indicator
//! analysis comes from a remote service keyed by (symbol, market). That
//! service is opaque to this crate: the contract below is its whole surface,
//! and the payload body is carried as raw JSON the engine never inspects.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{MarketType, SecurityRecord, Symbol, UtcDateTime};

/// Analytics failure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyticsErrorKind {
    Unavailable,
    RateLimited,
    InvalidRequest,
    Internal,
}

/// Structured error surfaced by an analytics source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsError {
    kind: AnalyticsErrorKind,
    message: String,
    retryable: bool,
}

impl AnalyticsError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: AnalyticsErrorKind::Unavailable,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self {
            kind: AnalyticsErrorKind::RateLimited,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: AnalyticsErrorKind::InvalidRequest,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: AnalyticsErrorKind::Internal,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> AnalyticsErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            AnalyticsErrorKind::Unavailable => "analytics.unavailable",
            AnalyticsErrorKind::RateLimited => "analytics.rate_limited",
            AnalyticsErrorKind::InvalidRequest => "analytics.invalid_request",
            AnalyticsErrorKind::Internal => "analytics.internal",
        }
    }
}

impl Display for AnalyticsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for AnalyticsError {}

/// Request key for the analytics service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub symbol: Symbol,
    pub market: MarketType,
}

impl AnalysisRequest {
    pub fn new(symbol: Symbol, market: MarketType) -> Self {
        Self { symbol, market }
    }

    /// Request for a record picked out of a search result.
    pub fn for_record(record: &SecurityRecord) -> Self {
        Self::new(record.symbol.clone(), record.market)
    }
}

/// Opaque analytics payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisPayload {
    pub symbol: Symbol,
    pub market: MarketType,
    pub as_of: UtcDateTime,
    pub data: Value,
}

/// Remote analytics contract.
///
/// Retry and backoff policy live behind this trait, never in the search
/// engine.
pub trait AnalyticsSource: Send + Sync {
    fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisPayload, AnalyticsError>;
}
