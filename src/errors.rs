//! Error types for the configuration and I/O surface.
//!
//! The deduction core has no error path: normalization and classification
//! are total, and an unmatched code is a valid result. Errors only arise at
//! the edges, reading config and writing output.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WaybillError {
    #[error("failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("I/O error")]
    Io(#[from] std::io::Error),
}
