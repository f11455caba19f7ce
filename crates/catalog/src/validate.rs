//! Input and output checks shared by every catalog query.
//!
//! Input checks return `InvalidCriteria`; output checks pass the value through
//! or return `NoResultForCriteria` naming the query that came back empty.

use std::collections::BTreeMap;

use shopquery_core::{CatalogError, CatalogResult};

pub fn positive(name: &str, value: i64) -> CatalogResult<i64> {
    if value <= 0 {
        return Err(CatalogError::invalid_criteria(format!(
            "{name} must be greater than 0 (got {value})"
        )));
    }
    Ok(value)
}

pub fn non_blank<'a>(name: &str, value: &'a str) -> CatalogResult<&'a str> {
    if value.is_empty() {
        return Err(CatalogError::invalid_criteria(format!("{name} must not be empty")));
    }
    Ok(value)
}

pub fn non_empty_list<T>(query: &str, list: Vec<T>) -> CatalogResult<Vec<T>> {
    if list.is_empty() {
        return Err(CatalogError::no_result(query));
    }
    Ok(list)
}

pub fn non_empty_map<K, V>(query: &str, map: BTreeMap<K, V>) -> CatalogResult<BTreeMap<K, V>> {
    if map.is_empty() {
        return Err(CatalogError::no_result(query));
    }
    Ok(map)
}

pub fn non_empty_string(query: &str, value: String) -> CatalogResult<String> {
    if value.is_empty() {
        return Err(CatalogError::no_result(query));
    }
    Ok(value)
}

pub fn found<T>(query: &str, value: Option<T>) -> CatalogResult<T> {
    value.ok_or_else(|| CatalogError::no_result(query))
}

/// Rejects negative and NaN aggregates.
pub fn non_negative(query: &str, value: f64) -> CatalogResult<f64> {
    if value.is_nan() || value < 0.0 {
        return Err(CatalogError::no_result(query));
    }
    Ok(value)
}
