use serde::Serialize;

use scripdex_core::{Catalog, MarketType};

use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct MarketStatus {
    market: MarketType,
    securities: usize,
}

#[derive(Debug, Serialize)]
struct MarketsResponseData {
    catalog_version: String,
    markets: Vec<MarketStatus>,
}

pub fn run(catalog: &Catalog) -> Result<CommandResult, CliError> {
    let markets = MarketType::ALL
        .into_iter()
        .map(|market| MarketStatus {
            market,
            securities: catalog.partition(market).len(),
        })
        .collect::<Vec<_>>();

    let data = serde_json::to_value(MarketsResponseData {
        catalog_version: catalog.version().to_owned(),
        markets,
    })?;

    Ok(CommandResult::ok(data))
}
