//! Item filtering for menu listings.

use std::str::FromStr;

use menukit_core::{DietType, Item};
use serde::{Deserialize, Serialize};

use crate::error::UnknownDiet;

/// Trait for selecting items out of a category.
pub trait ItemFilter {
    /// Returns true if the item should be listed.
    fn matches(&self, item: &Item) -> bool;
}

impl<F: ItemFilter + ?Sized> ItemFilter for &F {
    fn matches(&self, item: &Item) -> bool {
        (**self).matches(item)
    }
}

impl<F: ItemFilter + ?Sized> ItemFilter for Box<F> {
    fn matches(&self, item: &Item) -> bool {
        (**self).matches(item)
    }
}

/// Case-insensitive substring search over name and description.
#[derive(Debug, Clone, Default)]
pub struct QueryFilter {
    needle: String,
}

impl QueryFilter {
    /// Creates a filter for `query`; a blank query matches every item.
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.trim().to_lowercase(),
        }
    }
}

impl ItemFilter for QueryFilter {
    fn matches(&self, item: &Item) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        format!("{} {}", item.name, item.description)
            .to_lowercase()
            .contains(&self.needle)
    }
}

/// Filter by dietary classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietFilter {
    /// Every item, including those with unspecified diet.
    #[default]
    All,
    /// Items explicitly marked vegetarian.
    Veg,
    /// Items explicitly marked non-vegetarian.
    NonVeg,
}

impl ItemFilter for DietFilter {
    fn matches(&self, item: &Item) -> bool {
        match self {
            DietFilter::All => true,
            DietFilter::Veg => item.diet_type == Some(DietType::Veg),
            DietFilter::NonVeg => item.diet_type == Some(DietType::NonVeg),
        }
    }
}

impl FromStr for DietFilter {
    type Err = UnknownDiet;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        if label.trim().eq_ignore_ascii_case("all") {
            return Ok(DietFilter::All);
        }
        match DietType::parse(label) {
            Some(DietType::Veg) => Ok(DietFilter::Veg),
            Some(DietType::NonVeg) => Ok(DietFilter::NonVeg),
            None => Err(UnknownDiet(label.to_string())),
        }
    }
}

/// Composite filter: all filters must match (AND).
#[derive(Default)]
pub struct AndFilter {
    /// Filters to combine with AND logic.
    pub filters: Vec<Box<dyn ItemFilter>>,
}

impl AndFilter {
    /// Adds a filter to the conjunction.
    pub fn with(mut self, filter: impl ItemFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }
}

impl ItemFilter for AndFilter {
    fn matches(&self, item: &Item) -> bool {
        self.filters.iter().all(|f| f.matches(item))
    }
}
