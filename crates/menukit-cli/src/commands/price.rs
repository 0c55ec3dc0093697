//! Price command implementation.

use menukit_canonical::{normalize_price, PriceUnit};
use serde_json::Value;

use crate::error::CliError;

pub fn run(raw: String, minor: bool) -> Result<(), CliError> {
    // Bare numbers are numeric input; everything else is a formatted string.
    let value = match serde_json::from_str::<Value>(raw.trim()) {
        Ok(number @ Value::Number(_)) => number,
        _ => Value::String(raw),
    };
    let unit = if minor { PriceUnit::Minor } else { PriceUnit::Major };
    println!("{}", normalize_price(Some(&value), unit));
    Ok(())
}
