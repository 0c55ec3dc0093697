//! Indexed view of a normalized catalog.
//!
//! The index owns the catalog it was built from and answers the lookups a
//! presentation layer needs: category by any alias a URL fragment might
//! carry, and item by id, slug, or display name within a category.

use std::collections::BTreeMap;

use menukit_canonical::{slugify, CategoryId};
use menukit_core::{Category, Item};
use serde::Serialize;
use tracing::debug;

use crate::error::LookupError;
use crate::filter::ItemFilter;

/// An item annotated with its owning category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemMatch<'a> {
    /// Owning category id.
    pub category_id: &'a CategoryId,
    /// Owning category display name.
    pub category_name: &'a str,
    /// The item itself.
    #[serde(flatten)]
    pub item: &'a Item,
}

/// Catalog plus alias table keyed by category id, slugified id, and name.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    categories: Vec<Category>,
    by_key: BTreeMap<String, usize>,
}

impl CatalogIndex {
    /// Builds the index over `categories`, preserving their order.
    ///
    /// All canonical ids are registered before any slugified id, and those
    /// before any display name; the first category to claim a key keeps it.
    pub fn build(categories: Vec<Category>) -> Self {
        let mut by_key = BTreeMap::new();
        let aliases: [fn(&Category) -> String; 3] = [
            |c| c.id.as_str().to_string(),
            |c| slugify(c.id.as_str()),
            |c| c.name.clone(),
        ];
        for alias in aliases {
            for (position, category) in categories.iter().enumerate() {
                let key = alias(category);
                if !key.is_empty() {
                    by_key.entry(key).or_insert(position);
                }
            }
        }
        debug!(
            categories = categories.len(),
            aliases = by_key.len(),
            "built catalog index"
        );
        Self { categories, by_key }
    }

    /// Categories in catalog order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// True when the catalog has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterates alias keys in stable order with the category id each maps to.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &CategoryId)> + '_ {
        self.by_key
            .iter()
            .map(|(key, &position)| (key.as_str(), &self.categories[position].id))
    }

    /// Every item across every category, in category then item order.
    pub fn flat_items(&self) -> impl Iterator<Item = ItemMatch<'_>> + '_ {
        self.categories.iter().flat_map(annotated)
    }

    /// Resolves a category by alias, falling back to the first category
    /// whose name slugifies to the key.
    ///
    /// Ids and names are aliases already, so only the slug comparison can
    /// match once the alias table misses.
    pub fn category(&self, key: &str) -> Option<&Category> {
        if let Some(&position) = self.by_key.get(key) {
            return Some(&self.categories[position]);
        }
        self.categories
            .iter()
            .find(|category| slugify(&category.name) == key)
    }

    /// Items of the category resolved by `key`.
    pub fn category_items(&self, key: &str) -> Result<&[Item], LookupError> {
        self.category(key)
            .map(|category| category.items.as_slice())
            .ok_or_else(|| LookupError::CategoryNotFound {
                category: key.to_string(),
            })
    }

    /// Finds an item by category key and item key.
    ///
    /// An alias hit selects that category's items. Otherwise the candidates
    /// are every item whose owning category's id, slugified name, or name
    /// equals the key, across all such categories. Among the candidates an
    /// exact id match wins, then a match of slugified name against the
    /// slugified key, then a raw name match.
    pub fn find_item(&self, category_key: &str, item_key: &str) -> Result<ItemMatch<'_>, LookupError> {
        let candidates: Vec<ItemMatch<'_>> = match self.by_key.get(category_key) {
            Some(&position) => annotated(&self.categories[position]).collect(),
            None => {
                let candidates: Vec<_> = self
                    .flat_items()
                    .filter(|m| {
                        m.category_id.as_str() == category_key
                            || slugify(m.category_name) == category_key
                            || m.category_name == category_key
                    })
                    .collect();
                if candidates.is_empty() {
                    return Err(LookupError::CategoryNotFound {
                        category: category_key.to_string(),
                    });
                }
                candidates
            }
        };

        let key_slug = slugify(item_key);
        let found = candidates
            .iter()
            .find(|m| m.item.id.as_str() == item_key)
            .or_else(|| {
                candidates
                    .iter()
                    .find(|m| !key_slug.is_empty() && slugify(&m.item.name) == key_slug)
            })
            .or_else(|| candidates.iter().find(|m| m.item.name == item_key));

        match found {
            Some(hit) => Ok(*hit),
            None => {
                debug!(category = category_key, item = item_key, "item lookup missed");
                Err(LookupError::ItemNotFound {
                    category: category_key.to_string(),
                    item: item_key.to_string(),
                })
            }
        }
    }

    /// Items of a category that pass `filter`, in source order.
    pub fn filter_items<F: ItemFilter + ?Sized>(
        &self,
        category_key: &str,
        filter: &F,
    ) -> Result<Vec<&Item>, LookupError> {
        Ok(self
            .category_items(category_key)?
            .iter()
            .filter(|item| filter.matches(item))
            .collect())
    }
}

fn annotated(category: &Category) -> impl Iterator<Item = ItemMatch<'_>> + '_ {
    category.items.iter().map(move |item| ItemMatch {
        category_id: &category.id,
        category_name: &category.name,
        item,
    })
}
