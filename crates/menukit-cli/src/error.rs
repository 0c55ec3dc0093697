//! CLI error type.

use menukit_index::LookupError;
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    /// Input file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// Payload is not valid JSON.
    #[error("invalid JSON in {path}: {source}")]
    Payload {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// Configuration file is not valid TOML or has wrong types.
    #[error("invalid config {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// `--structured` argument is not valid JSON.
    #[error("invalid --structured JSON: {0}")]
    Structured(#[source] serde_json::Error),
    /// Category or item lookup missed.
    #[error(transparent)]
    Lookup(#[from] LookupError),
    /// Result could not be rendered.
    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}
