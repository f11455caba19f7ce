//! Catalog query service.
//!
//! Grouping, filtering, sorting and aggregate views over an [`ItemRepository`],
//! with a uniform contract: bad input fails with `InvalidCriteria` before any
//! scan, an empty or absent result fails with `NoResultForCriteria`.
//!
//! [`ItemRepository`]: shopquery_infra::ItemRepository

pub mod config;
pub mod service;
pub mod validate;

pub use config::CatalogConfig;
pub use service::CatalogService;
