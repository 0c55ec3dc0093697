//! Normalize command implementation.

use menukit_core::normalize_catalog_with_report;
use serde_json::json;
use tracing::warn;

use crate::error::CliError;
use crate::output;
use crate::payload;

pub fn run(payload: String, report: bool) -> Result<(), CliError> {
    let raw = payload::load(&payload)?;
    let (categories, diagnostics) = normalize_catalog_with_report(&raw);
    for warning in &diagnostics.warnings {
        warn!(code = warning.code(), "payload normalized with warnings");
    }

    if report {
        println!(
            "{}",
            output::format_json(&json!({ "catalog": categories, "report": diagnostics }))?
        );
    } else {
        println!("{}", output::format_json(&categories)?);
    }
    Ok(())
}
