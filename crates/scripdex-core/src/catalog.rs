//! Static, versioned security catalog partitioned by market.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{CoreError, MarketType, SecurityRecord, ValidationError};

const BUILTIN_CATALOG: &str = include_str!("catalog/builtin.json");

/// Serde document shape for catalog configuration files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogDocument {
    version: String,
    securities: Vec<SecurityRecord>,
}

/// Immutable catalog of searchable securities.
///
/// Records are split into their market partitions once at construction and
/// never change afterwards. Every loading path funnels through
/// [`Catalog::new`], so file-supplied and programmatic catalogs obey the
/// same invariants: non-empty version, no blank names, no duplicate
/// (symbol, market) identities.
#[derive(Debug, Clone)]
pub struct Catalog {
    version: String,
    domestic: Vec<SecurityRecord>,
    foreign: Vec<SecurityRecord>,
}

impl Catalog {
    pub fn new(
        version: impl Into<String>,
        records: Vec<SecurityRecord>,
    ) -> Result<Self, ValidationError> {
        let version = version.into();
        if version.trim().is_empty() {
            return Err(ValidationError::EmptyCatalogVersion);
        }

        let mut seen: HashSet<(String, MarketType)> = HashSet::with_capacity(records.len());
        let mut domestic = Vec::new();
        let mut foreign = Vec::new();

        for record in records {
            // Guards the serde path, which bypasses SecurityRecord::new.
            if record.full_name.trim().is_empty() {
                return Err(ValidationError::EmptySecurityName);
            }
            if !seen.insert((record.symbol.as_str().to_owned(), record.market)) {
                return Err(ValidationError::DuplicateSecurity {
                    symbol: record.symbol.to_string(),
                    market: record.market.to_string(),
                });
            }

            match record.market {
                MarketType::Domestic => domestic.push(record),
                MarketType::Foreign => foreign.push(record),
            }
        }

        Ok(Self {
            version,
            domestic,
            foreign,
        })
    }

    /// Parse a catalog configuration document.
    pub fn from_json_str(input: &str) -> Result<Self, CoreError> {
        let document: CatalogDocument = serde_json::from_str(input)?;
        Self::new(document.version, document.securities).map_err(CoreError::from)
    }

    /// Load a catalog configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// The catalog bundled with the application.
    pub fn builtin() -> Self {
        Self::from_json_str(BUILTIN_CATALOG).expect("bundled catalog must be valid")
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Records belonging to one market partition, in catalog order.
    pub fn partition(&self, market: MarketType) -> &[SecurityRecord] {
        match market {
            MarketType::Domestic => &self.domestic,
            MarketType::Foreign => &self.foreign,
        }
    }

    pub fn len(&self) -> usize {
        self.domestic.len() + self.foreign.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domestic.is_empty() && self.foreign.is_empty()
    }

    pub(crate) fn into_parts(self) -> (String, Vec<SecurityRecord>, Vec<SecurityRecord>) {
        (self.version, self.domestic, self.foreign)
    }
}
