use serde::{Deserialize, Serialize};

use crate::{MarketType, Symbol, ValidationError};

/// Catalog entry for one listed security.
///
/// Identity is (symbol, market); display names are not guaranteed unique.
/// Immutable once loaded into a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityRecord {
    pub symbol: Symbol,
    pub full_name: String,
    pub market: MarketType,
}

impl SecurityRecord {
    pub fn new(
        symbol: Symbol,
        full_name: impl Into<String>,
        market: MarketType,
    ) -> Result<Self, ValidationError> {
        let full_name = full_name.into();
        if full_name.trim().is_empty() {
            return Err(ValidationError::EmptySecurityName);
        }

        Ok(Self {
            symbol,
            full_name,
            market,
        })
    }
}
