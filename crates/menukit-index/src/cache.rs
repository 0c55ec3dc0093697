//! Per-payload memoization of normalized, indexed catalogs.

use std::collections::{BTreeMap, VecDeque};
use std::sync::Arc;

use menukit_canonical::{Digest, NormalizationReport};
use menukit_core::normalize_catalog_with_report;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::CacheError;
use crate::index::CatalogIndex;

/// Number of distinct payloads kept when no capacity is given.
pub const DEFAULT_CAPACITY: usize = 8;

/// A catalog built once from one payload instance.
#[derive(Debug)]
pub struct CachedCatalog {
    /// Digest of the payload the catalog was built from.
    pub digest: Digest,
    /// Indexed catalog.
    pub index: CatalogIndex,
    /// Diagnostics from normalization.
    pub report: NormalizationReport,
}

/// Memoizes catalogs by payload digest.
///
/// Identical payloads share one immutable catalog. When full, the oldest
/// entry is evicted first.
#[derive(Debug)]
pub struct CatalogCache {
    capacity: usize,
    entries: BTreeMap<Digest, Arc<CachedCatalog>>,
    order: VecDeque<Digest>,
}

impl Default for CatalogCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl CatalogCache {
    /// Creates a cache holding at most `capacity` catalogs (minimum one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: BTreeMap::new(),
            order: VecDeque::new(),
        }
    }

    /// Returns the catalog for `payload`, normalizing only on first sight.
    pub fn get_or_build(&mut self, payload: &Value) -> Result<Arc<CachedCatalog>, CacheError> {
        let digest = Digest::of_payload(payload)?;
        if let Some(hit) = self.entries.get(&digest) {
            debug!(digest = %digest.b64, "catalog cache hit");
            return Ok(Arc::clone(hit));
        }

        let (categories, report) = normalize_catalog_with_report(payload);
        let built = Arc::new(CachedCatalog {
            digest: digest.clone(),
            index: CatalogIndex::build(categories),
            report,
        });
        info!(
            digest = %digest.b64,
            categories = built.index.len(),
            "normalized catalog"
        );

        while self.order.len() >= self.capacity {
            if let Some(evicted) = self.order.pop_front() {
                self.entries.remove(&evicted);
            }
        }
        self.order.push_back(digest.clone());
        self.entries.insert(digest, Arc::clone(&built));
        Ok(built)
    }

    /// True when a catalog for `digest` is cached.
    pub fn contains(&self, digest: &Digest) -> bool {
        self.entries.contains_key(digest)
    }

    /// Number of cached catalogs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every cached catalog.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn identical_payloads_share_one_catalog() {
        let mut cache = CatalogCache::default();
        let first = cache.get_or_build(&json!({"Salads": [{"name": "Greek"}]})).unwrap();
        let second = cache.get_or_build(&json!({"Salads": [{"name": "Greek"}]})).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(&first.digest));
    }

    #[test]
    fn new_payload_rebuilds() {
        let mut cache = CatalogCache::default();
        let first = cache.get_or_build(&json!({"Salads": []})).unwrap();
        let second = cache.get_or_build(&json!({"Bowls": []})).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(second.index.categories()[0].name, "Bowls");
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn oldest_entry_is_evicted() {
        let mut cache = CatalogCache::with_capacity(2);
        let a = cache.get_or_build(&json!({"A": []})).unwrap();
        cache.get_or_build(&json!({"B": []})).unwrap();
        cache.get_or_build(&json!({"C": []})).unwrap();
        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(&a.digest));

        cache.clear();
        assert!(cache.is_empty());
    }
}
