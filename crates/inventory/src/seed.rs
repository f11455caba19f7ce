//! Seed datasets.
//!
//! These are plain values handed to a repository at construction time; nothing
//! here is process-wide state.

use shopquery_core::{CatalogError, CatalogResult};

use crate::item::{Item, ItemLocation, ItemType};

const REFERENCE_CATALOG_JSON: &str = include_str!("../data/reference_catalog.json");

/// Small fixed fixture: ids 2001..=2010, five items in OSLO and five in HAMAR.
///
/// Exactly one product label starts with `X` (`"Producer13 Xest17"`).
pub fn sample_items() -> Vec<Item> {
    use ItemLocation::{Hamar, Oslo};
    use ItemType::{Beverage, Clothing, Electronics};

    vec![
        Item::new(2001, "Producer1 Test1", Oslo, Beverage, 1),
        Item::new(2002, "Producer2 Test2", Oslo, Electronics, 1),
        Item::new(2003, "Producer3 Test3", Oslo, Clothing, 1),
        Item::new(2004, "Producer4 Test4", Hamar, Beverage, 1),
        Item::new(2005, "Producer5 Test5", Hamar, Electronics, 1),
        Item::new(2006, "Producer6 Test7", Hamar, Clothing, 1),
        Item::new(2007, "Producer11 Test12", Hamar, Clothing, 100),
        Item::new(2008, "Producer11 Test15", Hamar, Clothing, 60),
        Item::new(2010, "Producer13 Xest17", Oslo, Beverage, 70),
        Item::new(2009, "Producer12 Test16", Oslo, Beverage, 70),
    ]
}

/// Larger reference dataset covering every location and type.
pub fn reference_catalog() -> CatalogResult<Vec<Item>> {
    items_from_json(REFERENCE_CATALOG_JSON)
}

/// Parse a JSON array of item records.
pub fn items_from_json(json: &str) -> CatalogResult<Vec<Item>> {
    serde_json::from_str(json)
        .map_err(|e| CatalogError::invalid_data(format!("failed to parse item dataset: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopquery_core::Entity;
    use std::collections::HashSet;

    #[test]
    fn sample_fixture_shape() {
        let items = sample_items();
        assert_eq!(items.len(), 10);
        let oslo = items.iter().filter(|i| i.location() == ItemLocation::Oslo).count();
        assert_eq!(oslo, 5);
        let ids: HashSet<_> = items.iter().map(|i| i.id()).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn reference_catalog_loads_and_is_well_formed() {
        let items = reference_catalog().unwrap();
        assert!(items.len() > 20);

        let ids: HashSet<_> = items.iter().map(|i| i.id()).collect();
        assert_eq!(ids.len(), items.len(), "ids must be unique");

        for item in &items {
            assert!(item.producer_token().is_ok(), "{} lacks a producer", item.name());
        }

        for loc in ItemLocation::ALL {
            assert!(items.iter().any(|i| i.location() == *loc), "no item in {loc}");
        }
        for ty in ItemType::ALL {
            assert!(items.iter().any(|i| i.item_type() == *ty), "no item of type {ty}");
        }
    }

    #[test]
    fn rejects_malformed_json() {
        let err = items_from_json(r#"[{"id": 1, "name": "A B"}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidData(_)));
    }

    #[test]
    fn rejects_unknown_location() {
        let err = items_from_json(
            r#"[{"id":1,"name":"A B","location":"MOSS","type":"FOOD","stock":1}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidData(_)));
    }
}
