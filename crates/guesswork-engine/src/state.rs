//! Per-round mutable state.

use serde::{Deserialize, Serialize};

use guesswork_core::types::QuestionId;

use crate::ranking::RankedItem;
use crate::termination::GuessReason;

/// Where a round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    /// Nothing asked or answered since the last reset.
    Fresh,
    /// Questions are being asked.
    InProgress,
    /// The termination policy says it is time to guess.
    ReadyToGuess,
}

/// Scores and bookkeeping for one round. Replaced wholesale on reset.
#[derive(Debug, Clone)]
pub(crate) struct RoundState {
    /// Running score per item, in declaration order.
    pub scores: Vec<f64>,
    /// Dispensed question indices, in dispense order.
    pub asked: Vec<usize>,
    /// `asked_mask[q]` is true once question `q` has been dispensed.
    pub asked_mask: Vec<bool>,
    /// Question awaiting an answer.
    pub current: Option<usize>,
    pub answered: usize,
}

impl RoundState {
    pub fn fresh(item_count: usize, question_count: usize) -> Self {
        Self {
            scores: vec![0.0; item_count],
            asked: Vec::with_capacity(question_count),
            asked_mask: vec![false; question_count],
            current: None,
            answered: 0,
        }
    }

    pub fn mark_asked(&mut self, question: usize) {
        self.asked_mask[question] = true;
        self.asked.push(question);
        self.current = Some(question);
    }

    pub fn is_fresh(&self) -> bool {
        self.asked.is_empty() && self.answered == 0
    }
}

/// Serializable view of a round for debugging and logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub phase: RoundPhase,
    pub questions_asked: usize,
    pub questions_answered: usize,
    pub total_questions: usize,
    /// Dispensed questions, in dispense order.
    pub asked: Vec<QuestionId>,
    pub current: Option<QuestionId>,
    pub ranking: Vec<RankedItem>,
    /// Top score minus runner-up; `None` when there is no runner-up.
    pub margin: Option<f64>,
    pub guess_reason: Option<GuessReason>,
}
