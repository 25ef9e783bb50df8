//! Errors raised while loading JSON inputs.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised by the `load_*` functions.
#[derive(Debug, Error)]
pub enum DataError {
    /// The file could not be opened or read.
    #[error("failed to read {path}")]
    Read {
        /// Path that was being read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid JSON of the expected shape.
    #[error("failed to parse {path}")]
    Parse {
        /// Path that was being parsed.
        path: Utf8PathBuf,
        /// Source error produced by `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The places document contained no usable entries.
    #[error("no places found in {path}")]
    NoPlaces {
        /// Path of the places document.
        path: Utf8PathBuf,
    },
    /// The distances document contained no usable entries.
    #[error("no distances found in {path}")]
    NoDistances {
        /// Path of the distances document.
        path: Utf8PathBuf,
    },
}
