//! Subcommand implementations.

pub mod categories;
pub mod find;
pub mod items;
pub mod normalize;
pub mod nutrition;
pub mod price;
pub mod resolve_image;
pub mod slugify;
