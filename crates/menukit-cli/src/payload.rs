//! Payload loading.

use std::io::{self, Read};

use menukit_core::normalize_catalog_with_report;
use menukit_index::CatalogIndex;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::CliError;

/// Reads a JSON payload from `path`, or from stdin when `path` is `-`.
pub fn load(path: &str) -> Result<Value, CliError> {
    let text = if path == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|source| CliError::Read {
                path: "<stdin>".to_string(),
                source,
            })?;
        buffer
    } else {
        std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_string(),
            source,
        })?
    };
    debug!(path, bytes = text.len(), "read payload");
    serde_json::from_str(&text).map_err(|source| CliError::Payload {
        path: path.to_string(),
        source,
    })
}

/// Loads, normalizes, and indexes a payload.
///
/// Builds the index directly; `CatalogCache` is for long-lived callers that
/// see the same payload repeatedly.
pub fn load_catalog(path: &str) -> Result<CatalogIndex, CliError> {
    let payload = load(path)?;
    let (categories, report) = normalize_catalog_with_report(&payload);
    for warning in &report.warnings {
        warn!(code = warning.code(), "payload normalized with warnings");
    }
    Ok(CatalogIndex::build(categories))
}
