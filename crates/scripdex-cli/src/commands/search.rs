use serde::Serialize;

use scripdex_core::{normalize, Catalog, MarketType, SearchIndex, SecurityRecord};

use crate::cli::SearchArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct SearchResponseData {
    query: String,
    market: MarketType,
    results: Vec<SecurityRecord>,
}

pub fn run(args: &SearchArgs, catalog: Catalog) -> Result<CommandResult, CliError> {
    let market = MarketType::from(args.market);
    let index = SearchIndex::new(catalog);

    let results = index
        .search(&args.query, market, args.limit)?
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();

    let data = serde_json::to_value(SearchResponseData {
        query: args.query.clone(),
        market,
        results,
    })?;

    let mut result = CommandResult::ok(data).with_market(market);
    if normalize(&args.query).is_empty() {
        result = result.with_warning("query normalizes to empty; no candidates were considered");
    }

    Ok(result)
}
