//! Event payloads.

use serde::{Deserialize, Serialize};

use crate::answer::Answer;
use crate::config::PlayMode;
use crate::types::{ItemId, QuestionId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundStartedEvent {
    pub mode: PlayMode,
    pub total_questions: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDispensedEvent {
    pub question_id: QuestionId,
    /// 1-based position of the question in this round.
    pub number: usize,
    pub total_questions: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecordedEvent {
    pub question_id: QuestionId,
    pub answer: Answer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessRevealedEvent {
    pub item_id: ItemId,
    pub score: f64,
    pub questions_asked: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessConfirmedEvent {
    pub item_id: ItemId,
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FutureShownEvent {
    pub item_id: ItemId,
    pub success_steps: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundResetEvent {
    /// Questions dispensed in the abandoned round.
    pub questions_asked: usize,
}
