use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Market partition a security is listed in.
///
/// Closed enumeration: an out-of-range partition cannot be represented, so
/// callers holding a `MarketType` can never trigger the invalid-partition
/// failure. Unknown values are rejected at the string boundary instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketType {
    Domestic,
    Foreign,
}

impl MarketType {
    pub const ALL: [Self; 2] = [Self::Domestic, Self::Foreign];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Domestic => "domestic",
            Self::Foreign => "foreign",
        }
    }
}

impl Display for MarketType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarketType {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "domestic" => Ok(Self::Domestic),
            "foreign" => Ok(Self::Foreign),
            other => Err(ValidationError::InvalidMarket {
                value: other.to_owned(),
            }),
        }
    }
}
