use std::collections::{BTreeMap, HashSet};

use tracing::{debug, instrument};

use shopquery_core::{CatalogError, CatalogResult, ItemId};
use shopquery_infra::ItemRepository;
use shopquery_inventory::{Item, ItemLocation, ItemType};

use crate::config::CatalogConfig;
use crate::validate;

/// Analytical views over an item repository.
///
/// Every query re-reads the repository; nothing is cached between calls.
#[derive(Debug)]
pub struct CatalogService<R> {
    repository: R,
    config: CatalogConfig,
}

impl<R> CatalogService<R>
where
    R: ItemRepository,
{
    pub fn new(repository: R) -> Self {
        Self::with_config(repository, CatalogConfig::default())
    }

    pub fn with_config(repository: R, config: CatalogConfig) -> Self {
        Self { repository, config }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    #[instrument(level = "debug", skip(self), err(level = "debug"))]
    pub fn items_per_location(&self) -> CatalogResult<BTreeMap<ItemLocation, Vec<Item>>> {
        let groups = group_by(self.repository.get_all(), |i| Ok(i.location()))?;
        let groups = validate::non_empty_map("items per location", groups)?;
        debug!(groups = groups.len(), "items grouped by location");
        Ok(groups)
    }

    #[instrument(level = "debug", skip(self), err(level = "debug"))]
    pub fn items_per_type(&self) -> CatalogResult<BTreeMap<ItemType, Vec<Item>>> {
        let groups = group_by(self.repository.get_all(), |i| Ok(i.item_type()))?;
        let groups = validate::non_empty_map("items per type", groups)?;
        debug!(groups = groups.len(), "items grouped by type");
        Ok(groups)
    }

    #[instrument(level = "debug", skip(self), err(level = "debug"))]
    pub fn items_per_producer(&self) -> CatalogResult<BTreeMap<String, Vec<Item>>> {
        let groups = group_by(self.repository.get_all(), |i| {
            i.producer_token().map(str::to_owned)
        })?;
        let groups = validate::non_empty_map("items per producer", groups)?;
        debug!(groups = groups.len(), "items grouped by producer");
        Ok(groups)
    }

    /// Two-way split on `stock > high_stock_threshold`. Both keys are always present.
    #[instrument(level = "debug", skip(self), err(level = "debug"))]
    pub fn items_partitioned_by_stock(&self) -> CatalogResult<BTreeMap<bool, Vec<Item>>> {
        let threshold = self.config.high_stock_threshold;
        let mut partition = BTreeMap::from([(false, Vec::new()), (true, Vec::new())]);
        for item in self.repository.get_all() {
            partition
                .entry(item.stock() > threshold)
                .or_insert_with(Vec::new)
                .push(item);
        }
        let partition = validate::non_empty_map("items partitioned by stock", partition)?;
        debug!(
            high = partition.get(&true).map_or(0, Vec::len),
            low = partition.get(&false).map_or(0, Vec::len),
            "items partitioned by stock"
        );
        Ok(partition)
    }

    #[instrument(level = "debug", skip(self), err(level = "debug"))]
    pub fn item_by_id(&self, id: i64) -> CatalogResult<Item> {
        let id = validate::positive("id", id)?;
        let item = self.repository.find_by_id(ItemId::new(id));
        let item = validate::found(&format!("item with id {id}"), item)?;
        debug!(count = 1, "item found by id");
        Ok(item)
    }

    /// Every item's producer token, in storage order, joined by the configured separator.
    #[instrument(level = "debug", skip(self), err(level = "debug"))]
    pub fn producers_joined(&self) -> CatalogResult<String> {
        let items = self.repository.get_all();
        let producers = items
            .iter()
            .map(Item::producer_token)
            .collect::<CatalogResult<Vec<_>>>()?;
        let joined = producers.join(self.config.producer_separator.as_str());
        let joined = validate::non_empty_string("producer names", joined)?;
        debug!(count = producers.len(), "producer names joined");
        Ok(joined)
    }

    #[instrument(level = "debug", skip(self), err(level = "debug"))]
    pub fn locations_with_stock_above(&self, threshold: i64) -> CatalogResult<Vec<ItemLocation>> {
        let threshold = validate::positive("stock threshold", threshold)?;
        let locations = self.distinct_locations(|i| i64::from(i.stock()) > threshold);
        let locations =
            validate::non_empty_list(&format!("locations with stock above {threshold}"), locations)?;
        debug!(count = locations.len(), "locations with stock above threshold");
        Ok(locations)
    }

    #[instrument(level = "debug", skip(self), err(level = "debug"))]
    pub fn locations_with_stock_below(&self, threshold: i64) -> CatalogResult<Vec<ItemLocation>> {
        let threshold = validate::positive("stock threshold", threshold)?;
        let locations = self.distinct_locations(|i| i64::from(i.stock()) < threshold);
        let locations =
            validate::non_empty_list(&format!("locations with stock below {threshold}"), locations)?;
        debug!(count = locations.len(), "locations with stock below threshold");
        Ok(locations)
    }

    #[instrument(level = "debug", skip(self), err(level = "debug"))]
    pub fn items_at_location_with_stock_above(
        &self,
        location: ItemLocation,
        threshold: i64,
    ) -> CatalogResult<Vec<Item>> {
        let threshold = validate::positive("stock threshold", threshold)?;
        let mut items = self.repository.get_by_location(location);
        items.retain(|i| i64::from(i.stock()) > threshold);
        let items = validate::non_empty_list(
            &format!("items in {location} with stock above {threshold}"),
            items,
        )?;
        debug!(count = items.len(), "items at location with stock above threshold");
        Ok(items)
    }

    #[instrument(level = "debug", skip(self), err(level = "debug"))]
    pub fn items_at_location_with_stock_below(
        &self,
        location: ItemLocation,
        threshold: i64,
    ) -> CatalogResult<Vec<Item>> {
        let threshold = validate::positive("stock threshold", threshold)?;
        let mut items = self.repository.get_by_location(location);
        items.retain(|i| i64::from(i.stock()) < threshold);
        let items = validate::non_empty_list(
            &format!("items in {location} with stock below {threshold}"),
            items,
        )?;
        debug!(count = items.len(), "items at location with stock below threshold");
        Ok(items)
    }

    /// Same query as [`CatalogService::items_at_location_with_stock_above`].
    pub fn items_at_location_stock_higher_than(
        &self,
        location: ItemLocation,
        threshold: i64,
    ) -> CatalogResult<Vec<Item>> {
        self.items_at_location_with_stock_above(location, threshold)
    }

    /// Items whose product label starts with `prefix`, ignoring case.
    #[instrument(level = "debug", skip(self), err(level = "debug"))]
    pub fn items_with_label_starting_with(&self, prefix: &str) -> CatalogResult<Vec<Item>> {
        let prefix = validate::non_blank("prefix", prefix)?.to_uppercase();
        let mut matches = Vec::new();
        for item in self.repository.get_all() {
            if item.product_label()?.to_uppercase().starts_with(&prefix) {
                matches.push(item);
            }
        }
        let matches =
            validate::non_empty_list(&format!("items with label starting with {prefix:?}"), matches)?;
        debug!(count = matches.len(), "items with label prefix");
        Ok(matches)
    }

    #[instrument(level = "debug", skip(self), err(level = "debug"))]
    pub fn average_stock_at_location(&self, location: ItemLocation) -> CatalogResult<f64> {
        let query = format!("average stock in {location}");
        let items = validate::non_empty_list(&query, self.repository.get_by_location(location))?;
        let total: u64 = items.iter().map(|i| u64::from(i.stock())).sum();
        let average = validate::non_negative(&query, total as f64 / items.len() as f64)?;
        debug!(count = items.len(), average, "average stock at location");
        Ok(average)
    }

    /// Highest stock; the first such item wins a tie.
    #[instrument(level = "debug", skip(self), err(level = "debug"))]
    pub fn item_with_most_stock(&self) -> CatalogResult<Item> {
        let item = self
            .repository
            .get_all()
            .into_iter()
            .reduce(|best, next| if next.stock() > best.stock() { next } else { best });
        let item = validate::found("item with most stock", item)?;
        debug!(count = 1, stock = item.stock(), "item with most stock");
        Ok(item)
    }

    /// Lowest stock; the first such item wins a tie.
    #[instrument(level = "debug", skip(self), err(level = "debug"))]
    pub fn item_with_least_stock(&self) -> CatalogResult<Item> {
        let item = self
            .repository
            .get_all()
            .into_iter()
            .reduce(|best, next| if next.stock() < best.stock() { next } else { best });
        let item = validate::found("item with least stock", item)?;
        debug!(count = 1, stock = item.stock(), "item with least stock");
        Ok(item)
    }

    /// Ascending by the whole name, producer token included.
    #[instrument(level = "debug", skip(self), err(level = "debug"))]
    pub fn items_sorted_by_name(&self) -> CatalogResult<Vec<Item>> {
        let mut items = self.repository.get_all();
        items.sort_by(|a, b| a.name().cmp(b.name()));
        let items = validate::non_empty_list("items sorted by name", items)?;
        debug!(count = items.len(), "items sorted by name");
        Ok(items)
    }

    /// Ascending by product label only, ignoring the producer token.
    #[instrument(level = "debug", skip(self), err(level = "debug"))]
    pub fn items_sorted_by_label(&self) -> CatalogResult<Vec<Item>> {
        let mut keyed = self
            .repository
            .get_all()
            .into_iter()
            .map(|item| {
                let label = item.product_label()?.to_owned();
                Ok::<_, CatalogError>((label, item))
            })
            .collect::<CatalogResult<Vec<_>>>()?;
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        let items = keyed.into_iter().map(|(_, item)| item).collect();
        let items = validate::non_empty_list("items sorted by label", items)?;
        debug!(count = items.len(), "items sorted by label");
        Ok(items)
    }

    /// Descending by stock; equal stock keeps storage order.
    #[instrument(level = "debug", skip(self), err(level = "debug"))]
    pub fn items_sorted_by_stock_desc(&self) -> CatalogResult<Vec<Item>> {
        let mut items = self.repository.get_all();
        items.sort_by(|a, b| b.stock().cmp(&a.stock()));
        let items = validate::non_empty_list("items sorted by stock", items)?;
        debug!(count = items.len(), "items sorted by stock");
        Ok(items)
    }

    /// Full scan with structurally equal records collapsed to their first occurrence.
    #[instrument(level = "debug", skip(self), err(level = "debug"))]
    pub fn distinct_items(&self) -> CatalogResult<Vec<Item>> {
        let items = dedup(self.repository.get_all());
        let items = validate::non_empty_list("distinct items", items)?;
        debug!(count = items.len(), "distinct items");
        Ok(items)
    }

    /// `[first_start, first_end]` followed by `[second_start, second_end]`;
    /// overlapping ranges yield repeated items.
    #[instrument(level = "debug", skip(self), err(level = "debug"))]
    pub fn items_in_two_ranges(
        &self,
        first_start: i64,
        first_end: i64,
        second_start: i64,
        second_end: i64,
    ) -> CatalogResult<Vec<Item>> {
        let first_start = validate::positive("first range start", first_start)?;
        let first_end = validate::positive("first range end", first_end)?;
        let second_start = validate::positive("second range start", second_start)?;
        let second_end = validate::positive("second range end", second_end)?;

        let mut items = self
            .repository
            .get_range(ItemId::new(first_start), ItemId::new(first_end));
        items.extend(
            self.repository
                .get_range(ItemId::new(second_start), ItemId::new(second_end)),
        );
        let items = validate::non_empty_list("items in two id ranges", items)?;
        debug!(count = items.len(), "items in two id ranges");
        Ok(items)
    }

    /// Items matching the location OR the type OR the producer substring,
    /// without duplicates, in that order of discovery.
    #[instrument(level = "debug", skip(self), err(level = "debug"))]
    pub fn items_matching_any(
        &self,
        location: ItemLocation,
        item_type: ItemType,
        producer: &str,
    ) -> CatalogResult<Vec<Item>> {
        let producer = validate::non_blank("producer", producer)?;

        let mut items = self.repository.get_by_location(location);
        items.extend(self.repository.get_by_type(item_type));
        items.extend(self.repository.get_by_producer(producer));

        let items = validate::non_empty_list(
            &format!("items in {location}, of type {item_type} or by {producer:?}"),
            dedup(items),
        )?;
        debug!(count = items.len(), "items matching any filter");
        Ok(items)
    }

    #[instrument(level = "debug", skip(self), err(level = "debug"))]
    pub fn total_stock(&self) -> CatalogResult<u64> {
        let items = validate::non_empty_list("total stock", self.repository.get_all())?;
        let total: u64 = items.iter().map(|i| u64::from(i.stock())).sum();
        debug!(count = items.len(), total, "total stock");
        Ok(total)
    }

    fn distinct_locations(&self, pred: impl Fn(&Item) -> bool) -> Vec<ItemLocation> {
        let mut locations = Vec::new();
        for item in self.repository.get_all() {
            if pred(&item) && !locations.contains(&item.location()) {
                locations.push(item.location());
            }
        }
        locations
    }
}

fn group_by<K: Ord>(
    items: Vec<Item>,
    key: impl Fn(&Item) -> CatalogResult<K>,
) -> CatalogResult<BTreeMap<K, Vec<Item>>> {
    let mut groups: BTreeMap<K, Vec<Item>> = BTreeMap::new();
    for item in items {
        groups.entry(key(&item)?).or_default().push(item);
    }
    Ok(groups)
}

fn dedup(items: Vec<Item>) -> Vec<Item> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
