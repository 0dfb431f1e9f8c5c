//! CLI argument definitions for scripdex.
//!
//! The CLI is the disposable shell around the search engine: it parses
//! arguments, loads a catalog, runs one command and renders the envelope.
//! Anything interactive (debouncing, minimum-query gating) belongs to a
//! richer frontend, not here and never in the engine.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use scripdex_core::MarketType;

/// Fuzzy company and ticker finder over a static security catalog.
#[derive(Debug, Parser)]
#[command(
    name = "scripdex",
    author,
    version,
    about = "Fuzzy security search over a static catalog"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings and errors as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Path to a catalog document; defaults to the bundled catalog.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single JSON object output.
    Json,
    /// Human-readable table.
    Table,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search a market partition for matching securities.
    ///
    /// # Examples
    ///
    ///   scripdex search tcs --market domestic
    ///   scripdex search "tata consultency" --market domestic --limit 5
    Search(SearchArgs),

    /// List market partitions with their catalog counts.
    Markets,
}

/// Arguments for the `search` command.
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Free-form search query (ticker or company name).
    pub query: String,

    /// Market partition to search.
    #[arg(long, value_enum)]
    pub market: MarketChoice,

    /// Maximum number of results to return.
    #[arg(long, default_value_t = 8)]
    pub limit: usize,
}

/// Market partition selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MarketChoice {
    /// Domestic exchange listings.
    Domestic,
    /// Foreign exchange listings.
    Foreign,
}

impl From<MarketChoice> for MarketType {
    fn from(choice: MarketChoice) -> Self {
        match choice {
            MarketChoice::Domestic => MarketType::Domestic,
            MarketChoice::Foreign => MarketType::Foreign,
        }
    }
}
