//! Error types emitted by the Waymark CLI.
//!
//! Configuration errors sit behind `Arc` so the enum stays within
//! `clippy::result_large_err` limits.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use waymark_core::OptimizeError;
use waymark_data::DataError;

/// Errors emitted by the Waymark CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Clap rejected the command line.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Merging configuration files, environment and flags failed.
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// No layer supplied a required option.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing flag.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// Only one of latitude and longitude was supplied.
    #[error("--latitude and --longitude must be given together")]
    PartialLocation,
    /// An input path names nothing on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// An input path names a directory or other non-file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// Inspecting an input path failed with an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The requested start id is not among the loaded places.
    #[error("start place {id} is not in the places document")]
    UnknownStart {
        /// Requested start id.
        id: u64,
    },
    /// Loading an input document failed.
    #[error(transparent)]
    Data(#[from] DataError),
    /// The optimizer rejected the configuration or the request.
    #[error("route optimization failed: {0}")]
    Optimize(#[from] OptimizeError),
    /// Serializing the route failed.
    #[error("failed to serialize route: {0}")]
    SerializeRoute(#[source] serde_json::Error),
    /// Writing the route output failed.
    #[error("failed to write route output: {0}")]
    WriteRouteOutput(#[source] std::io::Error),
}
