//! Inventory domain module.
//!
//! Item records, their closed enumerations, and the seed datasets used to
//! populate a repository. Pure data; no storage and no query logic.

pub mod item;
pub mod seed;

pub use item::{Item, ItemLocation, ItemType};
pub use seed::{items_from_json, reference_catalog, sample_items};
