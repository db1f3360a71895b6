//! Round misuse errors.

use super::error_code::{self, GuessworkErrorCode};

/// Call-order violations against a running round.
///
/// Callers are expected to consult `should_guess()` and the "none available"
/// sentinel instead of relying on these for control flow.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RoundError {
    #[error("no question is currently dispensed")]
    NoCurrentQuestion,

    #[error("every question in the catalog has already been asked")]
    CatalogExhausted,

    #[error("invalid answer value {value}: expected 1, 0.75, 0.25, 0, or null")]
    InvalidAnswerValue { value: f64 },
}

impl GuessworkErrorCode for RoundError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoCurrentQuestion => error_code::NO_CURRENT_QUESTION,
            Self::CatalogExhausted => error_code::CATALOG_EXHAUSTED,
            Self::InvalidAnswerValue { .. } => error_code::INVALID_ANSWER,
        }
    }
}
