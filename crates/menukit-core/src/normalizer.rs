//! Catalog normalization.
//!
//! Turns any of the supported payload shapes into an ordered list of
//! [`Category`] values. Normalization is total: malformed records become
//! fallback categories or are skipped, never errors. Each call starts from
//! fresh state, so the same payload always produces the same catalog.

use std::collections::BTreeSet;

use menukit_canonical::{
    extract_nutrition, normalize_price, slugify, CategoryId, ItemId, NormalizationReport,
    PriceUnit,
};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::assets::image_filename;
use crate::model::{Category, DietType, Item};
use crate::shape::{classify_record, classify_root, nested_categories, RecordShape, RootShape};

/// Report warning: payload root was neither an array nor an object.
pub const WARN_UNRECOGNIZED_ROOT: &str = "UnrecognizedRoot";
/// Report warning: a record matched no known shape.
pub const WARN_FALLBACK_CATEGORY: &str = "FallbackCategory";
/// Report warning: a category id had to be qualified or suffixed.
pub const WARN_ID_COLLISION: &str = "IdCollision";
/// Report warning: an item id repeated within its category.
pub const WARN_ITEM_ID_COLLISION: &str = "ItemIdCollision";

/// Normalizes a raw payload into the canonical catalog.
pub fn normalize_catalog(raw: &Value) -> Vec<Category> {
    normalize_catalog_with_report(raw).0
}

/// Normalizes a raw payload and returns the diagnostics collected on the way.
pub fn normalize_catalog_with_report(raw: &Value) -> (Vec<Category>, NormalizationReport) {
    let mut catalog = CatalogBuilder::default();
    let root = classify_root(raw);
    debug!(shape = root.label(), "classified payload root");

    match root {
        RootShape::Records(entries) => {
            for (index, entry) in entries.iter().enumerate() {
                match nested_categories(entry) {
                    Some(subs) => {
                        let parent = ParentEntry::from_record(entry, &format!("parent-{index}"));
                        catalog.push_nested(&parent, subs);
                    }
                    None => {
                        let draft = catalog.draft_record(entry);
                        catalog.push(draft);
                    }
                }
            }
        }
        RootShape::Items(entries) => {
            let draft = CategoryDraft {
                items: listed_items(entries),
                ..CategoryDraft::default()
            };
            catalog.push(draft);
        }
        RootShape::Keyed(map) => {
            for (name, value) in map {
                catalog.push_keyed(name, value);
            }
        }
        RootShape::Record(record) => {
            let draft = catalog.draft_record(record);
            catalog.push(draft);
        }
        RootShape::Unsupported => {
            if !raw.is_null() {
                warn!("payload root is not an array or object; catalog is empty");
                catalog.report.warn(WARN_UNRECOGNIZED_ROOT);
            }
        }
    }

    catalog.finish()
}

/// Category fields gathered from a record before its id is assigned.
#[derive(Debug, Default)]
struct CategoryDraft {
    explicit_id: Option<String>,
    derived_id: Option<String>,
    name: Option<String>,
    parent: Option<String>,
    parent_slug: Option<String>,
    cover_image_ref: Option<String>,
    items: Vec<Item>,
}

/// Parent entry whose `categories` array is being flattened.
struct ParentEntry {
    display: String,
    slug: String,
    cover_image_ref: Option<String>,
}

impl ParentEntry {
    fn from_record(raw: &Value, fallback_slug: &str) -> Self {
        let record = raw.as_object();
        let name = record.and_then(|r| first_text(r, &["title", "name"]));
        Self::named(name, record, fallback_slug)
    }

    fn named(name: Option<String>, record: Option<&Map<String, Value>>, fallback_slug: &str) -> Self {
        let slug = name
            .as_deref()
            .map(slugify)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| fallback_slug.to_string());
        Self {
            display: name.unwrap_or_else(|| slug.clone()),
            slug,
            cover_image_ref: record.and_then(cover_image_ref),
        }
    }
}

#[derive(Default)]
struct CatalogBuilder {
    categories: Vec<Category>,
    used_ids: BTreeSet<String>,
    report: NormalizationReport,
}

impl CatalogBuilder {
    fn draft_record(&mut self, raw: &Value) -> CategoryDraft {
        let shape = classify_record(raw);
        debug!(shape = shape.label(), "classified category record");
        match shape {
            RecordShape::Cards { record, cards } => CategoryDraft {
                explicit_id: record.get("id").and_then(scalar_text),
                name: first_text(record, &["title", "name"]),
                cover_image_ref: cover_image_ref(record),
                items: card_items(cards),
                ..CategoryDraft::default()
            },
            RecordShape::Listed { record, entries } => CategoryDraft {
                explicit_id: record.get("id").and_then(scalar_text),
                name: first_text(record, &["name", "title"]),
                cover_image_ref: cover_image_ref(record),
                items: listed_items(entries),
                ..CategoryDraft::default()
            },
            RecordShape::KeyedList { name, entries } => CategoryDraft {
                name: Some(name.to_string()),
                items: listed_items(entries),
                ..CategoryDraft::default()
            },
            RecordShape::Unrecognized(value) => {
                self.report.warn(WARN_FALLBACK_CATEGORY);
                fallback_draft(value)
            }
        }
    }

    fn push_keyed(&mut self, name: &str, value: &Value) {
        if let Some(subs) = nested_categories(value) {
            let parent = ParentEntry::named(Some(name.to_string()), value.as_object(), "parent");
            self.push_nested(&parent, subs);
            return;
        }
        let mut draft = match value {
            Value::Array(entries) => CategoryDraft {
                items: listed_items(entries),
                ..CategoryDraft::default()
            },
            Value::Object(_) => self.draft_record(value),
            _ => {
                self.report.warn(WARN_FALLBACK_CATEGORY);
                CategoryDraft::default()
            }
        };
        draft.name = Some(name.to_string());
        self.push(draft);
    }

    fn push_nested(&mut self, parent: &ParentEntry, subs: &[Value]) {
        for (index, sub) in subs.iter().enumerate() {
            let mut draft = self.draft_record(sub);
            let sub_slug = draft
                .name
                .as_deref()
                .map(slugify)
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| format!("sub-{index}"));
            draft.derived_id = Some(format!("{}--{}", parent.slug, sub_slug));
            draft.parent = Some(parent.display.clone());
            draft.parent_slug = Some(parent.slug.clone());
            if draft.cover_image_ref.is_none() {
                draft.cover_image_ref = parent.cover_image_ref.clone();
            }
            self.push(draft);
        }
    }

    fn push(&mut self, draft: CategoryDraft) {
        let position = self.categories.len();
        let name_slug = draft
            .name
            .as_deref()
            .map(slugify)
            .filter(|s| !s.is_empty());
        let name = draft
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| format!("Category {}", position + 1));
        let candidate = draft
            .explicit_id
            .or(draft.derived_id)
            .or(name_slug)
            .unwrap_or_else(|| {
                self.report.count("synthesized_ids");
                format!("cat-{position}")
            });
        let id = self.claim_id(candidate, draft.parent_slug.as_deref());
        let items = self.dedupe_item_ids(draft.items);

        self.report.count("categories");
        self.report.add("items", items.len() as u64);
        self.categories.push(Category {
            id: CategoryId::new(id),
            name,
            parent: draft.parent,
            cover_image_ref: draft.cover_image_ref,
            items,
        });
    }

    /// Suffixes repeated item ids so they stay unique within the category.
    fn dedupe_item_ids(&mut self, mut items: Vec<Item>) -> Vec<Item> {
        let mut seen = BTreeSet::new();
        for item in &mut items {
            if seen.insert(item.id.as_str().to_string()) {
                continue;
            }
            let unique = unique_suffix(item.id.as_str(), &seen);
            warn!(id = %item.id, unique = %unique, "item id collision");
            self.report.warn(WARN_ITEM_ID_COLLISION);
            seen.insert(unique.clone());
            item.id = ItemId::new(unique);
        }
        items
    }

    /// Reserves a catalog-unique id: parent-qualified first, then suffixed.
    fn claim_id(&mut self, candidate: String, parent_slug: Option<&str>) -> String {
        if self.used_ids.insert(candidate.clone()) {
            return candidate;
        }
        self.report.warn(WARN_ID_COLLISION);

        let base = match parent_slug {
            Some(parent) if !candidate.starts_with(&format!("{parent}--")) => {
                let qualified = format!("{parent}--{candidate}");
                if self.used_ids.insert(qualified.clone()) {
                    warn!(id = %candidate, qualified = %qualified, "category id collision");
                    return qualified;
                }
                qualified
            }
            _ => candidate.clone(),
        };
        let unique = unique_suffix(&base, &self.used_ids);
        warn!(id = %candidate, unique = %unique, "category id collision");
        self.used_ids.insert(unique.clone());
        unique
    }

    fn finish(self) -> (Vec<Category>, NormalizationReport) {
        (self.categories, self.report)
    }
}

fn unique_suffix(base: &str, used: &BTreeSet<String>) -> String {
    (2..)
        .map(|n| format!("{base}-{n}"))
        .find(|id| !used.contains(id))
        .unwrap_or_else(|| base.to_string())
}

fn fallback_draft(value: &Value) -> CategoryDraft {
    match value {
        Value::Object(record) => CategoryDraft {
            explicit_id: record.get("id").and_then(scalar_text),
            name: first_text(record, &["title", "name"]),
            cover_image_ref: cover_image_ref(record),
            ..CategoryDraft::default()
        },
        Value::Array(entries) => CategoryDraft {
            items: listed_items(entries),
            ..CategoryDraft::default()
        },
        Value::String(name) => CategoryDraft {
            name: Some(name.clone()),
            ..CategoryDraft::default()
        },
        _ => CategoryDraft::default(),
    }
}

fn card_items(cards: &[Value]) -> Vec<Item> {
    cards
        .iter()
        .enumerate()
        .filter_map(|(index, card)| {
            let info = card.pointer("/card/info")?.as_object()?;
            Some(card_item(info, index))
        })
        .collect()
}

fn card_item(info: &Map<String, Value>, index: usize) -> Item {
    let description = first_text(info, &["description", "subtitle"]).unwrap_or_default();
    let minor = [info.get("price"), info.get("defaultPrice")]
        .into_iter()
        .flatten()
        .find(|value| value.is_number());
    let price = match minor {
        Some(value) => normalize_price(Some(value), PriceUnit::Minor),
        None => normalize_price(first_present(info, &["priceString", "price"]), PriceUnit::Major),
    };
    let classifier = info
        .get("itemAttribute")
        .and_then(|attr| attr.get("vegClassifier"));
    ItemFields {
        id: info.get("id").and_then(scalar_text),
        fallback_name: format!("Item {}", index + 1),
        description,
        price,
        diet_type: diet_type(classifier, info.get("isVeg")),
    }
    .build(info, index)
}

fn listed_items(entries: &[Value]) -> Vec<Item> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| Some(listed_item(entry.as_object()?, index)))
        .collect()
}

fn listed_item(entry: &Map<String, Value>, index: usize) -> Item {
    let description = first_text(entry, &["description", "subtitle"]).unwrap_or_default();
    let price = match normalize_price(entry.get("price"), PriceUnit::Major) {
        p if p > 0.0 => p,
        _ => normalize_price(entry.get("priceInPaise"), PriceUnit::Minor),
    };
    let classifier = entry.get("type").or_else(|| entry.get("vegClassifier"));
    ItemFields {
        id: entry.get("id").and_then(scalar_text),
        fallback_name: String::new(),
        description,
        price,
        diet_type: diet_type(classifier, entry.get("isVeg")),
    }
    .build(entry, index)
}

/// Shape-specific item fields; the rest are read the same way everywhere.
struct ItemFields {
    id: Option<String>,
    fallback_name: String,
    description: String,
    price: f64,
    diet_type: Option<DietType>,
}

impl ItemFields {
    fn build(self, source: &Map<String, Value>, index: usize) -> Item {
        let image_ref = image_reference(source);
        let nutrition = extract_nutrition(source.get("nutrition"), Some(&self.description));
        Item {
            id: ItemId::new(self.id.unwrap_or_else(|| format!("item-{index}"))),
            name: first_text(source, &["name", "title"]).unwrap_or(self.fallback_name),
            image_filename: image_filename(&image_ref).to_string(),
            image_ref,
            description: self.description,
            price: self.price,
            nutrition,
            diet_type: self.diet_type,
            allergens: allergens(source),
        }
    }
}

/// Classifier string beats boolean flag; neither leaves the diet unspecified.
fn diet_type(classifier: Option<&Value>, flag: Option<&Value>) -> Option<DietType> {
    classifier
        .and_then(Value::as_str)
        .and_then(DietType::parse)
        .or_else(|| match flag? {
            Value::Bool(true) => Some(DietType::Veg),
            Value::Bool(false) => Some(DietType::NonVeg),
            Value::Number(n) => match n.as_i64() {
                Some(1) => Some(DietType::Veg),
                Some(0) => Some(DietType::NonVeg),
                _ => None,
            },
            _ => None,
        })
}

/// First of `imageRelPath`, `imageId`, `image`, `img`; arrays contribute their first element.
fn image_reference(source: &Map<String, Value>) -> String {
    ["imageRelPath", "imageId", "image", "img"]
        .iter()
        .filter_map(|field| source.get(*field))
        .find_map(|value| match value {
            Value::Array(values) => values.first().and_then(scalar_text),
            other => scalar_text(other),
        })
        .unwrap_or_default()
}

fn cover_image_ref(record: &Map<String, Value>) -> Option<String> {
    first_text(record, &["image48Id", "image", "img"])
}

fn allergens(source: &Map<String, Value>) -> Vec<String> {
    source
        .get("allergens")
        .and_then(Value::as_array)
        .map(|values| values.iter().filter_map(scalar_text).collect())
        .unwrap_or_default()
}

/// First field holding non-blank text (numbers are stringified).
fn first_text(record: &Map<String, Value>, fields: &[&str]) -> Option<String> {
    fields
        .iter()
        .filter_map(|field| record.get(*field))
        .find_map(scalar_text)
}

/// First field that is present and not null, blank, or `false`.
fn first_present<'a>(record: &'a Map<String, Value>, fields: &[&str]) -> Option<&'a Value> {
    fields
        .iter()
        .filter_map(|field| record.get(*field))
        .find(|value| match value {
            Value::Null | Value::Bool(false) => false,
            Value::String(s) => !s.trim().is_empty(),
            _ => true,
        })
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
