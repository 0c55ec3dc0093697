//! Nutrition command implementation.

use menukit_canonical::extract_nutrition;
use serde_json::Value;

use crate::error::CliError;
use crate::output;

pub fn run(structured: Option<String>, text: Option<String>) -> Result<(), CliError> {
    let structured = structured
        .map(|raw| serde_json::from_str::<Value>(&raw))
        .transpose()
        .map_err(CliError::Structured)?;
    let nutrition = extract_nutrition(structured.as_ref(), text.as_deref());
    println!("{}", output::format_json(&nutrition)?);
    Ok(())
}
