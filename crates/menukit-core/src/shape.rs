//! Source shape classification.
//!
//! Raw payloads are sniffed once, up front, into a labeled variant; the
//! normalizer then matches exhaustively on the label instead of probing
//! optional fields as it goes.

use serde_json::{Map, Value};

/// Field names that mark an object as an item rather than a category.
const ITEM_FIELDS: &[&str] = &[
    "price",
    "priceInPaise",
    "defaultPrice",
    "priceString",
    "description",
    "imageId",
    "imageRelPath",
    "isVeg",
    "nutrition",
];

/// Shape of one raw category record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecordShape<'a> {
    /// Delivery-style record with wrapped `itemCards`.
    Cards {
        /// The whole record (title, id, cover image).
        record: &'a Map<String, Value>,
        /// The `itemCards` array.
        cards: &'a [Value],
    },
    /// Pre-normalized record exposing `items` or `menu`.
    Listed {
        /// The whole record.
        record: &'a Map<String, Value>,
        /// The `items` (preferred) or `menu` array.
        entries: &'a [Value],
    },
    /// `{ "<name>": [ ...items ] }`.
    KeyedList {
        /// The single key, used as category name.
        name: &'a str,
        /// Its array value.
        entries: &'a [Value],
    },
    /// Anything else.
    Unrecognized(&'a Value),
}

impl RecordShape<'_> {
    /// Short label for logs and reports.
    pub const fn label(&self) -> &'static str {
        match self {
            RecordShape::Cards { .. } => "cards",
            RecordShape::Listed { .. } => "listed",
            RecordShape::KeyedList { .. } => "keyed-list",
            RecordShape::Unrecognized(_) => "unrecognized",
        }
    }
}

/// Shape of the whole payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootShape<'a> {
    /// Array of category records.
    Records(&'a [Value]),
    /// Array of items forming one implicit category.
    Items(&'a [Value]),
    /// Object keyed by category name.
    Keyed(&'a Map<String, Value>),
    /// A single category record at the root.
    Record(&'a Value),
    /// Null or a bare scalar.
    Unsupported,
}

impl RootShape<'_> {
    /// Short label for logs and reports.
    pub const fn label(&self) -> &'static str {
        match self {
            RootShape::Records(_) => "records",
            RootShape::Items(_) => "items",
            RootShape::Keyed(_) => "keyed",
            RootShape::Record(_) => "record",
            RootShape::Unsupported => "unsupported",
        }
    }
}

/// Classifies one category record, in priority order: cards, listed,
/// single-key map, unrecognized.
pub fn classify_record(raw: &Value) -> RecordShape<'_> {
    let Value::Object(record) = raw else {
        return RecordShape::Unrecognized(raw);
    };
    if let Some(cards) = array_field(record, "itemCards") {
        return RecordShape::Cards { record, cards };
    }
    if let Some(entries) = array_field(record, "items").or_else(|| array_field(record, "menu")) {
        return RecordShape::Listed { record, entries };
    }
    if record.len() == 1 {
        if let Some((name, Value::Array(entries))) = record.iter().next() {
            return RecordShape::KeyedList { name, entries };
        }
    }
    RecordShape::Unrecognized(raw)
}

/// Classifies the payload root.
pub fn classify_root(raw: &Value) -> RootShape<'_> {
    match raw {
        Value::Array(entries) => {
            let any_category = entries.iter().any(is_category_record);
            let any_item = entries.iter().any(is_item_record);
            if !any_category && any_item {
                RootShape::Items(entries)
            } else {
                RootShape::Records(entries)
            }
        }
        Value::Object(map) => match classify_record(raw) {
            RecordShape::Cards { .. } | RecordShape::Listed { .. } => RootShape::Record(raw),
            _ => RootShape::Keyed(map),
        },
        _ => RootShape::Unsupported,
    }
}

/// Non-empty `categories` array of a parent entry, if any.
pub fn nested_categories(raw: &Value) -> Option<&[Value]> {
    raw.as_object()
        .and_then(|record| array_field(record, "categories"))
        .filter(|subs| !subs.is_empty())
}

fn is_category_record(raw: &Value) -> bool {
    nested_categories(raw).is_some() || !matches!(classify_record(raw), RecordShape::Unrecognized(_))
}

fn is_item_record(raw: &Value) -> bool {
    raw.as_object()
        .is_some_and(|record| ITEM_FIELDS.iter().any(|field| record.contains_key(*field)))
}

fn array_field<'a>(record: &'a Map<String, Value>, field: &str) -> Option<&'a [Value]> {
    record.get(field).and_then(Value::as_array).map(Vec::as_slice)
}
