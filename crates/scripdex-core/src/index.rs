//! Search orchestration: partition slice, match, rank, top-K.

use crate::catalog::Catalog;
use crate::matcher::match_security;
use crate::normalize::normalize;
use crate::scorer::RankKey;
use crate::{MarketType, SearchError, SecurityRecord};

/// One partition record with its comparison fields normalized up front.
///
/// The catalog is immutable, so normalizing at construction is
/// observationally identical to normalizing per call and keeps the search
/// path allocation-light.
#[derive(Debug)]
struct IndexedRecord {
    record: SecurityRecord,
    symbol_norm: String,
    name_norm: String,
    name_tokens: Vec<String>,
}

impl IndexedRecord {
    fn new(record: SecurityRecord) -> Self {
        let symbol_norm = normalize(record.symbol.as_str());
        let name_norm = normalize(&record.full_name);
        let name_tokens = name_norm.split_whitespace().map(str::to_owned).collect();
        Self {
            record,
            symbol_norm,
            name_norm,
            name_tokens,
        }
    }
}

/// Scored candidate, transient per search call.
#[derive(Debug)]
struct MatchCandidate<'a> {
    record: &'a SecurityRecord,
    key: RankKey,
}

/// Read-only matching and ranking engine over an immutable catalog.
///
/// Fully constructed before the first call and never mutated afterwards, so
/// concurrent callers need no coordination; every call works only on its own
/// transient candidate set.
#[derive(Debug)]
pub struct SearchIndex {
    version: String,
    domestic: Vec<IndexedRecord>,
    foreign: Vec<IndexedRecord>,
}

impl SearchIndex {
    pub fn new(catalog: Catalog) -> Self {
        let (version, domestic, foreign) = catalog.into_parts();
        Self {
            version,
            domestic: domestic.into_iter().map(IndexedRecord::new).collect(),
            foreign: foreign.into_iter().map(IndexedRecord::new).collect(),
        }
    }

    /// Version of the catalog this index was built from.
    pub fn version(&self) -> &str {
        &self.version
    }

    fn partition(&self, market: MarketType) -> &[IndexedRecord] {
        match market {
            MarketType::Domestic => &self.domestic,
            MarketType::Foreign => &self.foreign,
        }
    }

    /// Rank the selected partition against `query` and return at most
    /// `limit` records, best match first.
    ///
    /// The result borrows the original records; no copies, no mutation. An
    /// empty or unmatched query yields `Ok` with an empty Vec. Only a zero
    /// `limit` is a contract violation, rejected rather than coerced so a
    /// caller bug cannot masquerade as "no results".
    pub fn search(
        &self,
        query: &str,
        market: MarketType,
        limit: usize,
    ) -> Result<Vec<&SecurityRecord>, SearchError> {
        if limit == 0 {
            return Err(SearchError::InvalidLimit { limit });
        }

        let query = normalize(query);
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let mut candidates: Vec<MatchCandidate<'_>> = self
            .partition(market)
            .iter()
            .filter_map(|indexed| {
                match_security(
                    &query,
                    &indexed.symbol_norm,
                    &indexed.name_norm,
                    &indexed.name_tokens,
                )
                .map(|tier_match| MatchCandidate {
                    record: &indexed.record,
                    key: RankKey::new(&indexed.record, tier_match),
                })
            })
            .collect();

        candidates.sort_by(|a, b| a.key.cmp(&b.key));
        candidates.truncate(limit);

        Ok(candidates
            .into_iter()
            .map(|candidate| candidate.record)
            .collect())
    }
}
