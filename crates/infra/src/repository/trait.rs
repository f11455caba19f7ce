use std::sync::Arc;

use shopquery_core::{CatalogResult, Entity, ItemId};
use shopquery_inventory::{Item, ItemLocation, ItemType};

/// Storage-agnostic item repository.
///
/// The attribute filters are provided on top of [`ItemRepository::get_all`] and
/// preserve the backing store's iteration order.
pub trait ItemRepository: Send + Sync {
    /// First item whose id equals `id`, or `None`.
    fn find_by_id(&self, id: ItemId) -> Option<Item>;

    /// Append an item. Duplicate ids are not rejected.
    fn create(&self, item: Item) -> bool;

    /// Replace the stored item carrying `item.id()` in a single step.
    ///
    /// Fails with `CatalogError::ItemNotFound` when no such item is stored.
    fn update(&self, item: Item) -> CatalogResult<bool>;

    /// Remove every item with this id; returns whether anything was removed.
    fn delete(&self, id: ItemId) -> bool;

    /// Snapshot of the whole collection in storage order.
    fn get_all(&self) -> Vec<Item>;

    /// Items with `start <= id <= end`, ascending by id.
    fn get_range(&self, start: ItemId, end: ItemId) -> Vec<Item> {
        let mut items: Vec<Item> = self
            .get_all()
            .into_iter()
            .filter(|i| (start..=end).contains(&i.id()))
            .collect();
        items.sort_by_key(|i| i.id());
        items
    }

    fn get_by_location(&self, location: ItemLocation) -> Vec<Item> {
        self.get_all()
            .into_iter()
            .filter(|i| i.location() == location)
            .collect()
    }

    fn get_by_type(&self, item_type: ItemType) -> Vec<Item> {
        self.get_all()
            .into_iter()
            .filter(|i| i.item_type() == item_type)
            .collect()
    }

    /// Loose producer match: spaces in the query become underscores, then the
    /// result is matched as a substring of the whole name.
    fn get_by_producer(&self, producer: &str) -> Vec<Item> {
        let needle = producer.replace(' ', "_");
        self.get_all()
            .into_iter()
            .filter(|i| i.name().contains(needle.as_str()))
            .collect()
    }
}

impl<R> ItemRepository for Arc<R>
where
    R: ItemRepository + ?Sized,
{
    fn find_by_id(&self, id: ItemId) -> Option<Item> {
        (**self).find_by_id(id)
    }

    fn create(&self, item: Item) -> bool {
        (**self).create(item)
    }

    fn update(&self, item: Item) -> CatalogResult<bool> {
        (**self).update(item)
    }

    fn delete(&self, id: ItemId) -> bool {
        (**self).delete(id)
    }

    fn get_all(&self) -> Vec<Item> {
        (**self).get_all()
    }

    fn get_range(&self, start: ItemId, end: ItemId) -> Vec<Item> {
        (**self).get_range(start, end)
    }

    fn get_by_location(&self, location: ItemLocation) -> Vec<Item> {
        (**self).get_by_location(location)
    }

    fn get_by_type(&self, item_type: ItemType) -> Vec<Item> {
        (**self).get_by_type(item_type)
    }

    fn get_by_producer(&self, producer: &str) -> Vec<Item> {
        (**self).get_by_producer(producer)
    }
}
