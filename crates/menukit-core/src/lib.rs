//! Canonical catalog model and normalizer for menu payloads.
//!
//! This crate provides:
//! - [`Category`] / [`Item`] value types produced once per payload
//! - [`AssetRegistry`], the write-once image registry and layered resolver
//! - Shape classification of raw records ([`classify_record`], [`classify_root`])
//! - [`normalize_catalog`], the total normalizer over all supported shapes
//!
//! Core invariants:
//! - Category ids are unique across a normalized catalog
//! - Item ids are unique within their category
//! - Normalization is deterministic and never fails; bad input degrades
//! - No filesystem or network access happens here
//!
#![deny(missing_docs)]

/// Image registry and resolution strategies.
pub mod assets;
/// Catalog value types.
pub mod model;
/// Payload-to-catalog normalization.
pub mod normalizer;
/// Raw record and root shape classification.
pub mod shape;

pub use assets::{image_filename, AssetRegistry, AssetRegistryBuilder, ImageTier, DEFAULT_PLACEHOLDER};
pub use model::{Category, DietType, Item};
pub use normalizer::{normalize_catalog, normalize_catalog_with_report};
pub use shape::{classify_record, classify_root, RecordShape, RootShape};
