use menukit_canonical::{CategoryId, ItemId, Nutrition};
use serde::{Deserialize, Serialize};

/// Dietary classification of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietType {
    /// Vegetarian.
    #[serde(rename = "veg")]
    Veg,
    /// Contains meat, fish, or egg.
    #[serde(rename = "nonveg")]
    NonVeg,
}

impl DietType {
    /// Parses a classifier string such as `"NONVEG"`, `"non-veg"`, or `"veg"`.
    ///
    /// Case, spaces, hyphens, and underscores are ignored. Unknown labels
    /// return `None` so a weaker signal can still decide.
    pub fn parse(label: &str) -> Option<Self> {
        let compact: String = label
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match compact.as_str() {
            "veg" | "vegetarian" => Some(DietType::Veg),
            "nonveg" | "nonvegetarian" => Some(DietType::NonVeg),
            _ => None,
        }
    }

    /// Serialized label (`veg` / `nonveg`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            DietType::Veg => "veg",
            DietType::NonVeg => "nonveg",
        }
    }
}

impl std::fmt::Display for DietType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single menu entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Source id, else `item-<index>`; unique within the owning category.
    pub id: ItemId,
    /// Display name (may be empty).
    pub name: String,
    /// Display description (may be empty).
    pub description: String,
    /// Unresolved image reference exactly as found in source.
    pub image_ref: String,
    /// Last path segment of `image_ref`.
    pub image_filename: String,
    /// Non-negative price in major currency units; `0` means unknown.
    pub price: f64,
    /// Stated nutrients only.
    pub nutrition: Nutrition,
    /// `None` means unspecified, not vegetarian.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet_type: Option<DietType>,
    /// Allergen labels copied from source.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allergens: Vec<String>,
}

/// A named group of items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Canonical id, unique across the catalog.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Enclosing group for categories nested under a parent entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Unresolved thumbnail reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_ref: Option<String>,
    /// Items in source order.
    pub items: Vec<Item>,
}
