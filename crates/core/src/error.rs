//! Catalog error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the catalog layers.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// The first two kinds are the caller-facing contract of every service query:
/// bad input is rejected before querying, an unsatisfiable request after it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A caller-supplied argument was empty or non-positive.
    #[error("invalid criteria: {0}")]
    InvalidCriteria(String),

    /// The data holds nothing matching the request.
    #[error("no items were found for the given search criteria: {0}")]
    NoResultForCriteria(String),

    /// A stored record breaks a data convention (e.g. a name without a space).
    #[error("invalid item data: {0}")]
    InvalidData(String),

    /// An update targeted an id that is not stored.
    #[error("item {0} not found")]
    ItemNotFound(ItemId),
}

impl CatalogError {
    pub fn invalid_criteria(msg: impl Into<String>) -> Self {
        Self::InvalidCriteria(msg.into())
    }

    pub fn no_result(msg: impl Into<String>) -> Self {
        Self::NoResultForCriteria(msg.into())
    }

    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }

    pub fn item_not_found(id: ItemId) -> Self {
        Self::ItemNotFound(id)
    }

    pub fn is_invalid_criteria(&self) -> bool {
        matches!(self, Self::InvalidCriteria(_))
    }

    pub fn is_no_result(&self) -> bool {
        matches!(self, Self::NoResultForCriteria(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_predicates_match_variants() {
        assert!(CatalogError::invalid_criteria("id must be > 0").is_invalid_criteria());
        assert!(CatalogError::no_result("by id").is_no_result());
        assert!(!CatalogError::invalid_data("x").is_no_result());
        assert!(!CatalogError::item_not_found(ItemId::new(1)).is_invalid_criteria());
    }

    #[test]
    fn messages_carry_context() {
        let err = CatalogError::item_not_found(ItemId::new(2001));
        assert_eq!(err.to_string(), "item 2001 not found");

        let err = CatalogError::no_result("location OSLO");
        assert!(err.to_string().ends_with("location OSLO"));
    }
}
