use std::sync::RwLock;

use tracing::debug;

use shopquery_core::{CatalogError, CatalogResult, Entity, ItemId};
use shopquery_inventory::Item;

use super::r#trait::ItemRepository;

/// In-memory item repository over a caller-supplied collection.
///
/// Linear scans only. A poisoned lock reads as an empty store and makes
/// mutations report failure.
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    items: RwLock<Vec<Item>>,
}

impl InMemoryItemRepository {
    /// Wrap an initial collection (e.g. one of the inventory seed datasets).
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    pub fn len(&self) -> usize {
        self.items.read().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ItemRepository for InMemoryItemRepository {
    fn find_by_id(&self, id: ItemId) -> Option<Item> {
        let items = self.items.read().ok()?;
        items.iter().find(|i| i.has_id(id)).cloned()
    }

    fn create(&self, item: Item) -> bool {
        match self.items.write() {
            Ok(mut items) => {
                debug!(item_id = %item.id(), "item created");
                items.push(item);
                true
            }
            Err(_) => false,
        }
    }

    fn update(&self, item: Item) -> CatalogResult<bool> {
        let Ok(mut items) = self.items.write() else {
            return Ok(false);
        };

        let id = item.id();
        let slot = items
            .iter_mut()
            .find(|i| i.has_id(id))
            .ok_or_else(|| CatalogError::item_not_found(id))?;
        *slot = item;

        debug!(item_id = %id, "item replaced");
        Ok(true)
    }

    fn delete(&self, id: ItemId) -> bool {
        let Ok(mut items) = self.items.write() else {
            return false;
        };

        let before = items.len();
        items.retain(|i| !i.has_id(id));
        let removed = before - items.len();

        if removed > 0 {
            debug!(item_id = %id, removed, "item deleted");
        }
        removed > 0
    }

    fn get_all(&self) -> Vec<Item> {
        self.items.read().map(|items| items.clone()).unwrap_or_default()
    }
}
