use menukit_core::normalize_catalog;
use menukit_index::{
    default_category, AndFilter, CatalogCache, CatalogIndex, DietFilter, LookupError, QueryFilter,
};
use serde_json::{json, Value};

fn payload() -> Value {
    json!([
        {
            "title": "Salads",
            "itemCards": [
                {"card": {"info": {"id": 101, "name": "Greek Salad", "price": 45000, "isVeg": 1,
                    "description": "feta, olives, cucumber"}}},
                {"card": {"info": {"id": 102, "name": "Chicken Caesar", "price": 52500,
                    "itemAttribute": {"vegClassifier": "NONVEG"}}}}
            ]
        },
        {
            "title": "Bowls",
            "categories": [
                {"title": "Poke", "itemCards": [
                    {"card": {"info": {"id": 201, "name": "Salmon Poke", "price": 61000}}}
                ]},
                {"title": "Grain", "items": [
                    {"id": "q", "name": "Quinoa Bowl", "price": 380, "type": "veg"}
                ]}
            ]
        }
    ])
}

fn index() -> CatalogIndex {
    CatalogIndex::build(normalize_catalog(&payload()))
}

#[test]
fn find_item_accepts_id_slug_or_name() {
    let index = index();
    let by_id = index.find_item("salads", "101").unwrap();
    let by_slug = index.find_item("salads", "greek-salad").unwrap();
    let by_name = index.find_item("Salads", "Greek Salad").unwrap();
    assert_eq!(by_id.item, by_slug.item);
    assert_eq!(by_id.item, by_name.item);
    assert_eq!(by_id.item.price, 450.0);
    assert_eq!(by_id.category_name, "Salads");
}

#[test]
fn nested_categories_are_reachable_by_qualified_id() {
    let index = index();
    let hit = index.find_item("bowls--poke", "salmon-poke").unwrap();
    assert_eq!(hit.item.id.as_str(), "201");
    assert_eq!(hit.category_id.as_str(), "bowls--poke");
    assert_eq!(index.category("Grain").unwrap().parent.as_deref(), Some("Bowls"));
}

#[test]
fn unknown_keys_are_not_found() {
    let index = index();
    assert_eq!(
        index.find_item("desserts", "101"),
        Err(LookupError::CategoryNotFound {
            category: "desserts".to_string()
        })
    );
    let miss = index.find_item("salads", "brownie").unwrap_err();
    assert_eq!(
        miss,
        LookupError::ItemNotFound {
            category: "salads".to_string(),
            item: "brownie".to_string()
        }
    );
    assert_eq!(miss.to_string(), "item not found: category salads, id brownie");
}

#[test]
fn every_category_is_reachable_by_its_id() {
    let index = index();
    for category in index.categories() {
        assert_eq!(index.category(category.id.as_str()).unwrap().id, category.id);
    }
    assert_eq!(index.flat_items().count(), 4);
}

#[test]
fn flat_items_serialize_with_category_annotation() {
    let index = index();
    let first = index.flat_items().next().unwrap();
    let value = serde_json::to_value(first).unwrap();
    assert_eq!(value["category_id"], "salads");
    assert_eq!(value["category_name"], "Salads");
    assert_eq!(value["id"], "101");
    assert_eq!(value["diet_type"], "veg");
}

#[test]
fn listing_filters_compose() {
    let index = index();
    let veg = index.filter_items("salads", &DietFilter::Veg).unwrap();
    assert_eq!(veg.len(), 1);
    assert_eq!(veg[0].name, "Greek Salad");

    let filter = AndFilter::default()
        .with(QueryFilter::new("olives"))
        .with(DietFilter::NonVeg);
    assert!(index.filter_items("salads", &filter).unwrap().is_empty());

    assert!(matches!(
        index.filter_items("nope", &DietFilter::All),
        Err(LookupError::CategoryNotFound { .. })
    ));
}

#[test]
fn default_category_opens_first_populated() {
    let index = index();
    assert_eq!(default_category(index.categories()).unwrap().id.as_str(), "salads");
}

#[test]
fn cache_serves_repeated_payloads() {
    let mut cache = CatalogCache::default();
    let first = cache.get_or_build(&payload()).unwrap();
    let again = cache.get_or_build(&payload()).unwrap();
    assert!(std::sync::Arc::ptr_eq(&first, &again));
    assert_eq!(first.index.len(), 3);
    assert_eq!(first.report.metric("items"), 4);
}
