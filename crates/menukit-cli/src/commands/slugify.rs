//! Slugify command implementation.

use menukit_canonical::slugify;

use crate::error::CliError;

pub fn run(text: String) -> Result<(), CliError> {
    println!("{}", slugify(&text));
    Ok(())
}
