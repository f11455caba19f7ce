//! Infrastructure layer: item storage behind the repository boundary.

pub mod repository;

pub use repository::{InMemoryItemRepository, ItemRepository};
