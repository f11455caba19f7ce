use serde::{Deserialize, Serialize};

use shopquery_core::{CatalogError, CatalogResult, Entity, ItemId};

/// Site where an item is stocked.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemLocation {
    Oslo,
    Hamar,
    Sarpsborg,
    Bergen,
    Trondheim,
    Stavanger,
}

/// Item category.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemType {
    Beverage,
    Electronics,
    Clothing,
    Food,
    Furniture,
    Toys,
}

macro_rules! impl_catalog_enum {
    ($t:ty, $name:literal, [$($variant:ident => $label:literal),+ $(,)?]) => {
        impl $t {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$t] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl core::str::FromStr for $t {
            type Err = CatalogError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| {
                        CatalogError::invalid_criteria(format!("unknown {}: {:?}", $name, s))
                    })
            }
        }
    };
}

impl_catalog_enum!(ItemLocation, "ItemLocation", [
    Oslo => "OSLO",
    Hamar => "HAMAR",
    Sarpsborg => "SARPSBORG",
    Bergen => "BERGEN",
    Trondheim => "TRONDHEIM",
    Stavanger => "STAVANGER",
]);

impl_catalog_enum!(ItemType, "ItemType", [
    Beverage => "BEVERAGE",
    Electronics => "ELECTRONICS",
    Clothing => "CLOTHING",
    Food => "FOOD",
    Furniture => "FURNITURE",
    Toys => "TOYS",
]);

/// A catalog record.
///
/// `name` is conventionally `"<Producer> <ProductLabel>"`; the producer token and
/// product label are derived by splitting on the first space.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    location: ItemLocation,
    #[serde(rename = "type")]
    item_type: ItemType,
    stock: u32,
}

impl Item {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        location: ItemLocation,
        item_type: ItemType,
        stock: u32,
    ) -> Self {
        Self {
            id: ItemId::new(id),
            name: name.into(),
            location,
            item_type,
            stock,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> ItemLocation {
        self.location
    }

    pub fn item_type(&self) -> ItemType {
        self.item_type
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Producer token: the part of `name` before the first space.
    pub fn producer_token(&self) -> CatalogResult<&str> {
        self.split_name().map(|(producer, _)| producer)
    }

    /// Product label: the part of `name` after the first space.
    pub fn product_label(&self) -> CatalogResult<&str> {
        self.split_name().map(|(_, label)| label)
    }

    fn split_name(&self) -> CatalogResult<(&str, &str)> {
        self.name.split_once(' ').ok_or_else(|| {
            CatalogError::invalid_data(format!(
                "item {} name {:?} has no producer/label separator",
                self.id, self.name
            ))
        })
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }
}
