//! Catalog loading from JSON or TOML.

use std::path::Path;

use super::Catalog;
use crate::errors::CatalogError;

impl Catalog {
    /// Parse a catalog from a JSON string. Does not validate.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(json).map_err(|e| CatalogError::Parse {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Parse a catalog from a TOML string. Does not validate.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, CatalogError> {
        toml::from_str(toml_str).map_err(|e| CatalogError::Parse {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load and validate a catalog file. The format follows the extension.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let shown = path.display().to_string();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let is_json = match extension.as_deref() {
            Some("json") => true,
            Some("toml") => false,
            _ => return Err(CatalogError::UnsupportedFormat { path: shown }),
        };

        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: shown.clone(),
            message: e.to_string(),
        })?;

        let parsed: Result<Catalog, String> = if is_json {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        } else {
            toml::from_str(&content).map_err(|e| e.to_string())
        };
        let catalog = parsed.map_err(|message| CatalogError::Parse {
            path: shown.clone(),
            message,
        })?;

        catalog.validate()?;
        tracing::debug!(
            path = %shown,
            items = catalog.item_count(),
            questions = catalog.question_count(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}
