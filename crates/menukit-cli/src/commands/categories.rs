//! Categories command implementation.

use std::path::Path;

use menukit_index::{default_category, summarize};

use crate::error::CliError;
use crate::output;
use crate::payload;
use crate::registry;

pub fn run(config: &Path, payload: String, json: bool) -> Result<(), CliError> {
    let assets = registry::load_registry(config)?;
    let index = payload::load_catalog(&payload)?;
    let categories = index.categories();
    let summaries = summarize(categories, &assets);

    if json {
        println!("{}", output::format_json(&summaries)?);
        return Ok(());
    }

    let default_id = default_category(categories).map(|c| &c.id);
    output::print_category_header();
    for summary in &summaries {
        println!(
            "{}",
            output::format_category_row(summary, default_id == Some(&summary.id))
        );
    }
    Ok(())
}
