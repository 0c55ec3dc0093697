//! Items command implementation.

use menukit_index::{AndFilter, DietFilter, QueryFilter};

use crate::error::CliError;
use crate::output;
use crate::payload;

pub fn run(
    payload: String,
    category: String,
    query: Option<String>,
    diet: DietFilter,
    json: bool,
) -> Result<(), CliError> {
    let index = payload::load_catalog(&payload)?;
    let filter = AndFilter::default()
        .with(QueryFilter::new(query.as_deref().unwrap_or_default()))
        .with(diet);
    let items = index.filter_items(&category, &filter)?;

    if json {
        println!("{}", output::format_json(&items)?);
        return Ok(());
    }

    output::print_item_header();
    for item in items {
        println!("{}", output::format_item_row(item));
    }
    Ok(())
}
