//! Top-level Guesswork configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{CatalogConfig, EngineConfig, PlayMode, SessionConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`GUESSWORK_*`)
/// 3. Project config (`guesswork.toml` in project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GuessworkConfig {
    pub engine: EngineConfig,
    pub catalog: CatalogConfig,
    pub session: SessionConfig,
}

/// Override arguments supplied by the embedding host.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub margin_threshold: Option<f64>,
    pub max_questions: Option<usize>,
    pub leading_set_size: Option<usize>,
    pub catalog_path: Option<String>,
    pub mode: Option<PlayMode>,
}

impl GuessworkConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = root.join(constants::CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): explicit overrides
        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &GuessworkConfig) -> Result<(), ConfigError> {
        config.engine.validate()?;
        if config.catalog.min_property_differences == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "catalog.min_property_differences".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut GuessworkConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: GuessworkConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut GuessworkConfig, other: &GuessworkConfig) {
        // Engine
        if other.engine.margin_threshold.is_some() {
            base.engine.margin_threshold = other.engine.margin_threshold;
        }
        if other.engine.max_questions.is_some() {
            base.engine.max_questions = other.engine.max_questions;
        }
        if other.engine.leading_set_size.is_some() {
            base.engine.leading_set_size = other.engine.leading_set_size;
        }

        // Catalog
        if other.catalog.path.is_some() {
            base.catalog.path = other.catalog.path.clone();
        }
        if other.catalog.min_property_differences.is_some() {
            base.catalog.min_property_differences = other.catalog.min_property_differences;
        }

        // Session
        if other.session.mode.is_some() {
            base.session.mode = other.session.mode;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `GUESSWORK_ENGINE_MARGIN_THRESHOLD`, `GUESSWORK_SESSION_MODE`, etc.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut GuessworkConfig) {
        if let Some(v) = env_parse::<f64>("ENGINE_MARGIN_THRESHOLD") {
            config.engine.margin_threshold = Some(v);
        }
        if let Some(v) = env_parse::<usize>("ENGINE_MAX_QUESTIONS") {
            config.engine.max_questions = Some(v);
        }
        if let Some(v) = env_parse::<usize>("ENGINE_LEADING_SET_SIZE") {
            config.engine.leading_set_size = Some(v);
        }
        if let Some(v) = env_parse::<usize>("CATALOG_MIN_PROPERTY_DIFFERENCES") {
            config.catalog.min_property_differences = Some(v);
        }
        if let Some(v) = env_parse::<PlayMode>("SESSION_MODE") {
            config.session.mode = Some(v);
        }
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut GuessworkConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.margin_threshold {
            config.engine.margin_threshold = Some(v);
        }
        if let Some(v) = overrides.max_questions {
            config.engine.max_questions = Some(v);
        }
        if let Some(v) = overrides.leading_set_size {
            config.engine.leading_set_size = Some(v);
        }
        if let Some(ref v) = overrides.catalog_path {
            config.catalog.path = Some(v.clone());
        }
        if let Some(v) = overrides.mode {
            config.session.mode = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Read and parse `GUESSWORK_<suffix>`.
fn env_parse<T: std::str::FromStr>(suffix: &str) -> Option<T> {
    std::env::var(format!("{}{suffix}", constants::ENV_PREFIX))
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
}
