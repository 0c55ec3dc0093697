//! Lookup index, filters, and memoized views over normalized catalogs.
//!
//! This crate provides:
//! - [`CatalogIndex`] with alias-based category lookup and `find_item`
//! - [`ItemFilter`] implementations for menu listings
//! - Presentation views ([`default_category`], [`summarize`])
//! - [`CatalogCache`], which normalizes each distinct payload once
//!
//! Lookups never panic on a miss: they return [`LookupError`] naming the
//! keys that missed.

#![deny(missing_docs)]

/// Per-payload catalog memoization.
pub mod cache;
/// Error types for lookups and caching.
pub mod error;
/// Item filtering API.
pub mod filter;
/// Catalog index and item lookup.
pub mod index;
/// Presentation views.
pub mod view;

pub use cache::{CachedCatalog, CatalogCache, DEFAULT_CAPACITY};
pub use error::{CacheError, LookupError, UnknownDiet};
pub use filter::{AndFilter, DietFilter, ItemFilter, QueryFilter};
pub use index::{CatalogIndex, ItemMatch};
pub use view::{default_category, summarize, CategorySummary};
