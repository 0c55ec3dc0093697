//! Presentation views over a normalized catalog.

use menukit_canonical::CategoryId;
use menukit_core::{AssetRegistry, Category, ImageTier};
use serde::Serialize;

/// Picks the category a menu page opens on.
///
/// The first category with at least one item, else the first category.
/// Returns `None` only for an empty catalog.
pub fn default_category(categories: &[Category]) -> Option<&Category> {
    categories
        .iter()
        .find(|category| !category.items.is_empty())
        .or_else(|| categories.first())
}

/// Sidebar entry for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    /// Category id.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Enclosing group, if nested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Number of items.
    pub item_count: usize,
    /// Resolved cover thumbnail locator; never empty.
    pub cover: String,
}

/// Summarizes every category, resolving covers at thumbnail tier.
pub fn summarize(categories: &[Category], assets: &AssetRegistry) -> Vec<CategorySummary> {
    categories
        .iter()
        .map(|category| CategorySummary {
            id: category.id.clone(),
            name: category.name.clone(),
            parent: category.parent.clone(),
            item_count: category.items.len(),
            cover: assets.resolve_image_for(
                category.cover_image_ref.as_deref().unwrap_or_default(),
                ImageTier::Thumbnail,
            ),
        })
        .collect()
}
