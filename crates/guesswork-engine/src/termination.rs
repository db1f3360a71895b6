//! Guess-termination policy.

use serde::{Deserialize, Serialize};

use guesswork_core::config::EngineConfig;

/// Why the engine considers the round ready to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessReason {
    /// Every question in the catalog has been asked.
    CatalogExhausted,
    /// The leader is ahead of the runner-up by more than the threshold.
    MarginReached,
    /// The per-round question cap was hit.
    QuestionCapReached,
}

/// Decides when to stop asking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessPolicy {
    pub margin_threshold: f64,
    pub max_questions: usize,
}

impl GuessPolicy {
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            margin_threshold: config.effective_margin_threshold(),
            max_questions: config.effective_max_questions(),
        }
    }

    /// First applicable reason, checked in order: exhaustion, margin, cap.
    pub fn evaluate(&self, asked: usize, total: usize, margin: f64) -> Option<GuessReason> {
        if asked >= total {
            Some(GuessReason::CatalogExhausted)
        } else if margin > self.margin_threshold {
            Some(GuessReason::MarginReached)
        } else if asked >= self.max_questions {
            Some(GuessReason::QuestionCapReached)
        } else {
            None
        }
    }
}

impl Default for GuessPolicy {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}
