//! `score` command: explain one route's deviation for a rider request.

use std::io::Write;

use camino::Utf8PathBuf;
use carpool_deviation::{DeviationEngine, DeviationEngineConfig, DeviationReport};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::{engine_config, load_route, load_search, require_existing, write_json};
use crate::{
    ARG_MAX_INTERLEAVINGS, ARG_REQUEST, ARG_ROUTE, CliError, ENV_SCORE_REQUEST, ENV_SCORE_ROUTE,
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score a single JSON-encoded route against a search request \
                 and print the breakdown: endpoint and stop deviation, the \
                 number of stop orderings tried, and the best ordering.",
    about = "Explain a route's deviation"
)]
#[ortho_config(prefix = "CARPOOL")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON file containing the search request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to a JSON file containing one route.
    #[arg(long = ARG_ROUTE, value_name = "path")]
    #[serde(default)]
    pub(crate) route: Option<Utf8PathBuf>,
    /// Upper bound on stop orderings scored.
    #[arg(long = ARG_MAX_INTERLEAVINGS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_interleavings: Option<usize>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreConfig {
    pub(crate) request_path: Utf8PathBuf,
    pub(crate) route_path: Utf8PathBuf,
    pub(crate) engine: DeviationEngineConfig,
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_SCORE_REQUEST,
        })?;
        let route_path = args.route.ok_or(CliError::MissingArgument {
            field: ARG_ROUTE,
            env: ENV_SCORE_ROUTE,
        })?;
        Ok(Self {
            request_path,
            route_path,
            engine: engine_config(args.max_interleavings)?,
        })
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_score_with(args, &mut stdout)
}

pub(crate) fn run_score_with(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.request_path, ARG_REQUEST)?;
    require_existing(&config.route_path, ARG_ROUTE)?;
    let report = execute_score(&config)?;
    write_json(writer, &report)
}

pub(crate) fn execute_score(config: &ScoreConfig) -> Result<DeviationReport, CliError> {
    let search = load_search(&config.request_path)?;
    let route = load_route(&config.route_path, ARG_ROUTE)?;
    Ok(DeviationEngine::with_config(config.engine).evaluate(&route, &search))
}
