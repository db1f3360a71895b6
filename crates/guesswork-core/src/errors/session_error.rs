//! Session (round controller) errors.

use super::error_code::{self, GuessworkErrorCode};
use super::RoundError;

/// Errors raised by the round controller when the player or UI acts out of turn.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("a round is already in progress")]
    AlreadyPlaying,

    #[error("no round is in progress (phase: {phase})")]
    NotPlaying { phase: String },

    #[error("an answer for the current question was already recorded")]
    AnswerLocked,

    #[error("no guess is awaiting confirmation (phase: {phase})")]
    NotAwaitingConfirmation { phase: String },

    #[error("guess confirmation is only available in guessing mode")]
    ConfirmationUnsupported,

    #[error("no match has been revealed (phase: {phase})")]
    NotRevealed { phase: String },

    #[error("the future view is only available after a discovery reveal")]
    FutureUnsupported,

    #[error("round error: {0}")]
    Round(#[from] RoundError),
}

impl GuessworkErrorCode for SessionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Round(e) => e.error_code(),
            _ => error_code::SESSION_ERROR,
        }
    }
}
