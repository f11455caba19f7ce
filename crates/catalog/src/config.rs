//! Service configuration.

use serde::Deserialize;

pub const HIGH_STOCK_THRESHOLD_ENV: &str = "SHOPQUERY_HIGH_STOCK_THRESHOLD";
pub const PRODUCER_SEPARATOR_ENV: &str = "SHOPQUERY_PRODUCER_SEPARATOR";

/// Tunables for the catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Stock level above which an item lands in the `true` partition.
    pub high_stock_threshold: u32,
    /// Separator placed between producer tokens when they are joined.
    pub producer_separator: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            high_stock_threshold: 1500,
            producer_separator: "X".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Defaults overridden by `SHOPQUERY_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`CatalogConfig::from_env`] over an arbitrary key lookup.
    ///
    /// Unparseable or empty values fall back to the default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(HIGH_STOCK_THRESHOLD_ENV) {
            match raw.trim().parse::<u32>() {
                Ok(v) => config.high_stock_threshold = v,
                Err(e) => tracing::warn!(
                    value = %raw,
                    "{HIGH_STOCK_THRESHOLD_ENV} is not a valid stock level ({e}); using {}",
                    config.high_stock_threshold
                ),
            }
        }

        if let Some(raw) = lookup(PRODUCER_SEPARATOR_ENV) {
            if raw.is_empty() {
                tracing::warn!(
                    "{PRODUCER_SEPARATOR_ENV} is empty; using {:?}",
                    config.producer_separator
                );
            } else {
                config.producer_separator = raw;
            }
        }

        config
    }

    pub fn with_high_stock_threshold(mut self, threshold: u32) -> Self {
        self.high_stock_threshold = threshold;
        self
    }

    pub fn with_producer_separator(mut self, separator: impl Into<String>) -> Self {
        self.producer_separator = separator.into();
        self
    }
}
