//! Resolve-image command implementation.

use std::path::Path;

use menukit_core::ImageTier;

use crate::error::CliError;
use crate::registry;

pub fn run(config: &Path, reference: String, thumbnail: bool) -> Result<(), CliError> {
    let assets = registry::load_registry(config)?;
    let tier = if thumbnail {
        ImageTier::Thumbnail
    } else {
        ImageTier::Detail
    };
    println!("{}", assets.resolve_image_for(&reference, tier));
    Ok(())
}
