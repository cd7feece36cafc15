//! `search` command: rank candidate routes for a rider request.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use carpool_deviation::{DeviationEngineConfig, RankedRoute, RouteSearch};
use carpool_fs::create_utf8_file;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::{engine_config, load_routes, load_search, require_existing, write_json};
use crate::{
    ARG_MAX_INTERLEAVINGS, ARG_OUTPUT, ARG_REQUEST, ARG_ROUTES, CliError, ENV_SEARCH_REQUEST,
    ENV_SEARCH_ROUTES,
};

/// CLI arguments for the `search` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank the routes in a JSON array against a JSON-encoded \
                 search request. Routes without free seats or whose \
                 deviation exceeds their own budget are left out; the rest \
                 are printed closest first.",
    about = "Rank routes for a search request"
)]
#[ortho_config(prefix = "CARPOOL")]
pub(crate) struct SearchArgs {
    /// Path to a JSON file containing the search request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to a JSON array of candidate routes.
    #[arg(long = ARG_ROUTES, value_name = "path")]
    #[serde(default)]
    pub(crate) routes: Option<Utf8PathBuf>,
    /// Upper bound on stop orderings scored per route.
    #[arg(long = ARG_MAX_INTERLEAVINGS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_interleavings: Option<usize>,
    /// Write the ranking here instead of standard output.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl SearchArgs {
    pub(crate) fn into_config(self) -> Result<SearchConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SearchConfig::try_from(merged)
    }
}

/// Resolved `search` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchConfig {
    /// Path to the JSON search request.
    pub(crate) request_path: Utf8PathBuf,
    /// Path to the JSON route array.
    pub(crate) routes_path: Utf8PathBuf,
    /// Engine settings.
    pub(crate) engine: DeviationEngineConfig,
    /// Optional output file.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl SearchConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_REQUEST)?;
        require_existing(&self.routes_path, ARG_ROUTES)?;
        Ok(())
    }
}

impl TryFrom<SearchArgs> for SearchConfig {
    type Error = CliError;

    fn try_from(args: SearchArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_SEARCH_REQUEST,
        })?;
        let routes_path = args.routes.ok_or(CliError::MissingArgument {
            field: ARG_ROUTES,
            env: ENV_SEARCH_ROUTES,
        })?;
        Ok(Self {
            request_path,
            routes_path,
            engine: engine_config(args.max_interleavings)?,
            output: args.output,
        })
    }
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_search_with(args, &mut stdout)
}

/// Run `search`, writing to `stdout` unless an output file is configured.
pub(crate) fn run_search_with(args: SearchArgs, stdout: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let ranked = execute_search(&config)?;
    match &config.output {
        Some(path) => write_to_file(path, &ranked),
        None => write_json(stdout, &ranked),
    }
}

pub(crate) fn execute_search(config: &SearchConfig) -> Result<Vec<RankedRoute>, CliError> {
    let search = load_search(&config.request_path)?;
    let routes = load_routes(&config.routes_path, ARG_ROUTES)?;
    Ok(RouteSearch::with_engine_config(config.engine).search(routes, &search))
}

fn write_to_file(path: &Utf8Path, ranked: &[RankedRoute]) -> Result<(), CliError> {
    let mut file = create_utf8_file(path).map_err(|source| CliError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    write_json(&mut file, ranked)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SearchConfig, CliError> {
    let merged = SearchArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SearchConfig::try_from(merged)
}
