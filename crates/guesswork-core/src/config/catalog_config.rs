//! Catalog configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Where the catalog lives and how strictly it is audited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to a `.json` or `.toml` catalog, relative to the project root.
    pub path: Option<String>,
    /// Minimum tested-property differences between any two items. Default: 2.
    pub min_property_differences: Option<usize>,
}

impl CatalogConfig {
    /// Returns the effective audit rule, defaulting to 2.
    pub fn effective_min_property_differences(&self) -> usize {
        self.min_property_differences
            .unwrap_or(constants::DEFAULT_MIN_PROPERTY_DIFFERENCES)
    }
}
