//! Matching engine configuration.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigError;

/// Tuning constants injected into the matching engine at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Early-stop when the top score leads the runner-up by more than this. Default: 4.0.
    pub margin_threshold: Option<f64>,
    /// Safety cap on questions dispensed per round. Default: 20.
    pub max_questions: Option<usize>,
    /// Number of leading items used to rank candidate questions. Default: 3.
    pub leading_set_size: Option<usize>,
}

impl EngineConfig {
    /// Returns the effective margin threshold, defaulting to 4.0.
    pub fn effective_margin_threshold(&self) -> f64 {
        self.margin_threshold
            .unwrap_or(constants::DEFAULT_MARGIN_THRESHOLD)
    }

    /// Returns the effective question cap, defaulting to 20.
    pub fn effective_max_questions(&self) -> usize {
        self.max_questions.unwrap_or(constants::DEFAULT_MAX_QUESTIONS)
    }

    /// Returns the effective leading-set size, defaulting to 3.
    pub fn effective_leading_set_size(&self) -> usize {
        self.leading_set_size
            .unwrap_or(constants::DEFAULT_LEADING_SET_SIZE)
    }

    /// Validate explicitly set values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(threshold) = self.margin_threshold {
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "engine.margin_threshold".to_string(),
                    message: "must be a finite number >= 0.0".to_string(),
                });
            }
        }
        if self.max_questions == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "engine.max_questions".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.leading_set_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "engine.leading_set_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    pub fn with_margin_threshold(mut self, threshold: f64) -> Self {
        self.margin_threshold = Some(threshold);
        self
    }

    pub fn with_max_questions(mut self, cap: usize) -> Self {
        self.max_questions = Some(cap);
        self
    }

    pub fn with_leading_set_size(mut self, k: usize) -> Self {
        self.leading_set_size = Some(k);
        self
    }
}
