//! Error types emitted by the carpool CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use carpool_core::{RouteId, RouteValidationError, SearchInputValidationError};
use thiserror::Error;

/// Errors emitted by the carpool CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Option or input the error refers to.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// The ordering cap was set to zero.
    #[error("--{field} must be at least 1")]
    ZeroMaxInterleavings {
        /// Name of the rejected option.
        field: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option or input the error refers to.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option or input the error refers to.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option or input the error refers to.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Opening an input file failed.
    #[error("failed to open {field} at {path:?}: {source}")]
    OpenInput {
        /// Option or input the error refers to.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// An input file did not contain the expected JSON.
    #[error("failed to parse {field} JSON at {path:?}: {source}")]
    ParseInput {
        /// Option or input the error refers to.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
    /// The search request failed validation.
    #[error("search request in {path:?} failed validation: {source}")]
    InvalidSearch {
        /// Offending path.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: SearchInputValidationError,
    },
    /// A route failed validation.
    #[error("route {id} in {path:?} failed validation: {source}")]
    InvalidRoute {
        /// Offending path.
        path: Utf8PathBuf,
        /// Identifier of the rejected route.
        id: RouteId,
        /// Validation failure.
        #[source]
        source: RouteValidationError,
    },
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Creating the output file failed.
    #[error("failed to create output file {path:?}: {source}")]
    CreateOutput {
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
