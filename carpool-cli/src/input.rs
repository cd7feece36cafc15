//! Loading, validating and emitting the JSON documents the commands share.

use std::io::{BufReader, Write};
use std::num::NonZeroUsize;

use camino::Utf8Path;
use carpool_core::{Route, SearchInput};
use carpool_deviation::DeviationEngineConfig;
use carpool_fs::{file_is_file, open_utf8_file};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{ARG_MAX_INTERLEAVINGS, ARG_REQUEST, CliError};

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Build the engine configuration from an optional ordering cap.
pub(crate) fn engine_config(
    max_interleavings: Option<usize>,
) -> Result<DeviationEngineConfig, CliError> {
    let Some(requested) = max_interleavings else {
        return Ok(DeviationEngineConfig::default());
    };
    let cap = NonZeroUsize::new(requested).ok_or(CliError::ZeroMaxInterleavings {
        field: ARG_MAX_INTERLEAVINGS,
    })?;
    Ok(DeviationEngineConfig {
        max_interleavings: cap,
    })
}

fn load_json<T: DeserializeOwned>(path: &Utf8Path, field: &'static str) -> Result<T, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate a JSON-encoded [`SearchInput`].
pub(crate) fn load_search(path: &Utf8Path) -> Result<SearchInput, CliError> {
    let search: SearchInput = load_json(path, ARG_REQUEST)?;
    search
        .validate()
        .map_err(|source| CliError::InvalidSearch {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(search)
}

/// Load and validate a JSON array of routes.
pub(crate) fn load_routes(path: &Utf8Path, field: &'static str) -> Result<Vec<Route>, CliError> {
    let routes: Vec<Route> = load_json(path, field)?;
    for route in &routes {
        validate_route(path, route)?;
    }
    Ok(routes)
}

/// Load and validate a single JSON-encoded route.
pub(crate) fn load_route(path: &Utf8Path, field: &'static str) -> Result<Route, CliError> {
    let route: Route = load_json(path, field)?;
    validate_route(path, &route)?;
    Ok(route)
}

fn validate_route(path: &Utf8Path, route: &Route) -> Result<(), CliError> {
    route.validate().map_err(|source| CliError::InvalidRoute {
        path: path.to_path_buf(),
        id: route.id,
        source,
    })
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
