//! Item repository boundary.
//!
//! The repository owns the mutable item collection and answers structural
//! queries. An empty result is a valid outcome here; judging cardinality is the
//! service layer's job.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryItemRepository;
pub use r#trait::ItemRepository;
