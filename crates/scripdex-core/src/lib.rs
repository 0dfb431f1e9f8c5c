//! Core contracts for scripdex.
//!
//! This crate contains:
//! - Canonical domain models and validation
//! - The static security catalog and its loaders
//! - The tiered fuzzy matching, scoring and ranking engine
//! - Response envelope and the analytics source boundary

pub mod analytics;
pub mod catalog;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod index;
pub mod matcher;
pub mod normalize;
pub mod scorer;

pub use analytics::{
    AnalysisPayload, AnalysisRequest, AnalyticsError, AnalyticsErrorKind, AnalyticsSource,
};
pub use catalog::Catalog;
pub use domain::{MarketType, SecurityRecord, Symbol, UtcDateTime};
pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta};
pub use error::{CoreError, SearchError, ValidationError};
pub use index::SearchIndex;
pub use matcher::{edit_distance, fuzzy_bound, match_security, MatchTier, TierMatch};
pub use normalize::normalize;
pub use scorer::RankKey;
