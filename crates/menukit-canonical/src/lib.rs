//! Canonical primitives for menu catalogs.
//!
//! Everything in this crate is a pure function of its input: identifiers are
//! derived with [`slugify`], prices are folded into major currency units with
//! [`normalize_price`], and nutrient figures are pulled out of structured or
//! free-form fields with [`extract_nutrition`]. None of these operations can
//! fail; unusable input degrades to a documented sentinel instead.
//!
#![deny(missing_docs)]

/// Payload digests used to memoize normalized catalogs.
pub mod digest;
/// Stable identifiers and the slug canonicalizer.
pub mod identifiers;
/// Nutrient extraction from structured objects and free text.
pub mod nutrition;
/// Price normalization into major currency units.
pub mod quantities;
/// Diagnostics emitted while normalizing a catalog.
pub mod report;
/// Validation errors for checked identifier construction.
pub mod validation;

pub use digest::{Digest, DigestAlg, DigestError};
pub use identifiers::{slugify, CategoryId, ItemId, Slug};
pub use nutrition::{extract_nutrition, Nutrient, Nutrition};
pub use quantities::{normalize_price, parse_decimal, PriceUnit};
pub use report::{NormalizationReport, ReportStatus, ReportWarning};
pub use validation::ValidationError;
