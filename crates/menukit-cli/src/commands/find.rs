//! Find command implementation.

use std::path::Path;

use crate::error::CliError;
use crate::output;
use crate::payload;
use crate::registry;

pub fn run(config: &Path, payload: String, category: String, item: String) -> Result<(), CliError> {
    let assets = registry::load_registry(config)?;
    let index = payload::load_catalog(&payload)?;

    match index.find_item(&category, &item) {
        Ok(found) => {
            let mut value = serde_json::to_value(found)?;
            value["image"] = assets.resolve_image(&found.item.image_ref).into();
            println!("{}", output::format_json(&value)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
