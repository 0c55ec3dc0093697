//! Error types for catalog lookups and caching.

use menukit_canonical::DigestError;
use thiserror::Error;

/// Explicit not-found results of index lookups.
///
/// Both variants carry the keys that missed so callers can render a
/// not-found state naming them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No category matched the key under any alias.
    #[error("category not found: {category}")]
    CategoryNotFound {
        /// Category key as queried.
        category: String,
    },
    /// The category resolved but none of its items matched.
    #[error("item not found: category {category}, id {item}")]
    ItemNotFound {
        /// Category key as queried.
        category: String,
        /// Item key as queried.
        item: String,
    },
}

/// Errors raised while memoizing catalogs.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Payload could not be digested.
    #[error("digest error: {0}")]
    Digest(#[from] DigestError),
}

/// Unknown diet filter label.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown diet filter '{0}' (expected all, veg, or nonveg)")]
pub struct UnknownDiet(pub String);
