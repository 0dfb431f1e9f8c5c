mod markets;
mod search;

use std::time::Instant;

use scripdex_core::{Catalog, Envelope, EnvelopeError, EnvelopeMeta, MarketType};
use serde_json::Value;
use uuid::Uuid;

use crate::cli::{Cli, Command};
use crate::error::CliError;

const SCHEMA_VERSION: &str = "v1.0.0";

pub struct CommandResult {
    pub data: Value,
    pub market: Option<MarketType>,
    pub warnings: Vec<String>,
    pub errors: Vec<EnvelopeError>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            market: None,
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn with_market(mut self, market: MarketType) -> Self {
        self.market = Some(market);
        self
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }
}

pub fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let started = Instant::now();

    let catalog = load_catalog(cli)?;
    let catalog_version = catalog.version().to_owned();

    let command_result = match &cli.command {
        Command::Search(args) => search::run(args, catalog)?,
        Command::Markets => markets::run(&catalog)?,
    };

    let latency_ms = started.elapsed().as_millis() as u64;

    let mut meta = EnvelopeMeta::new(
        Uuid::new_v4().to_string(),
        SCHEMA_VERSION,
        catalog_version,
        latency_ms,
    )?;

    if let Some(market) = command_result.market {
        meta = meta.with_market(market);
    }

    for warning in command_result.warnings {
        meta.push_warning(warning);
    }

    Envelope::with_errors(meta, command_result.data, command_result.errors)
        .map_err(CliError::from)
}

fn load_catalog(cli: &Cli) -> Result<Catalog, CliError> {
    match &cli.catalog {
        Some(path) => Catalog::from_path(path).map_err(CliError::from),
        None => Ok(Catalog::builtin()),
    }
}
