//! Command-line interface for scoring and ranking carpool routes.
//!
//! `carpool search` ranks a JSON array of routes against a rider's request;
//! `carpool score` explains the deviation of a single route. Options layer
//! from configuration files, `CARPOOL_*` environment variables and flags.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod input;
mod score;
mod search;

pub use error::CliError;

use score::{ScoreArgs, run_score};
use search::{SearchArgs, run_search};

pub(crate) const ARG_REQUEST: &str = "request";
pub(crate) const ARG_ROUTES: &str = "routes";
pub(crate) const ARG_ROUTE: &str = "route";
pub(crate) const ARG_MAX_INTERLEAVINGS: &str = "max-interleavings";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ENV_SEARCH_REQUEST: &str = "CARPOOL_CMDS_SEARCH_REQUEST_PATH";
pub(crate) const ENV_SEARCH_ROUTES: &str = "CARPOOL_CMDS_SEARCH_ROUTES";
pub(crate) const ENV_SCORE_REQUEST: &str = "CARPOOL_CMDS_SCORE_REQUEST_PATH";
pub(crate) const ENV_SCORE_ROUTE: &str = "CARPOOL_CMDS_SCORE_ROUTE";

/// Run the carpool CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when arguments, configuration or inputs are
/// invalid, or when output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Search(args) => run_search(args),
        Command::Score(args) => run_score(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "carpool",
    about = "Score and rank carpool routes against rider searches",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank candidate routes for a search request.
    Search(SearchArgs),
    /// Explain the deviation of one route for a search request.
    Score(ScoreArgs),
}

#[cfg(test)]
mod tests;
