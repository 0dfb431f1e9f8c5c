//! Total rank order over matched candidates.

use crate::matcher::{MatchTier, TierMatch};
use crate::SecurityRecord;

/// Sort key realizing the engine's ranking contract.
///
/// Field order is the contract: better tier first, then shorter display
/// name, then earlier match position, then case-insensitive full name, then
/// symbol. The derived lexicographic `Ord` makes the whole order auditable
/// here and leaves no pair of candidates unordered, so two calls with
/// identical inputs always rank identically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RankKey {
    tier: MatchTier,
    name_len: usize,
    position: usize,
    name_folded: String,
    symbol: String,
}

impl RankKey {
    pub fn new(record: &SecurityRecord, tier_match: TierMatch) -> Self {
        Self {
            tier: tier_match.tier,
            name_len: record.full_name.chars().count(),
            position: tier_match.position,
            name_folded: record.full_name.to_lowercase(),
            symbol: record.symbol.as_str().to_owned(),
        }
    }
}
