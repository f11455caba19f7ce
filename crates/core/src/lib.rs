//! `shopquery-core` — shared building blocks for the catalog query engine.
//!
//! This crate contains **pure** primitives (no storage, no logging setup).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{CatalogError, CatalogResult};
pub use id::ItemId;
