//! What the controller hands back to the presentation layer after each step.

use serde::{Deserialize, Serialize};

use guesswork_core::catalog::{Item, Question};
use guesswork_core::config::PlayMode;
use guesswork_core::types::{ItemId, QuestionId};
use guesswork_engine::GuessReason;

/// A question ready to show the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionPrompt {
    pub id: QuestionId,
    pub text: String,
    pub hint: Option<String>,
    /// 1-based position in this round.
    pub number: usize,
    pub total: usize,
}

impl QuestionPrompt {
    pub(crate) fn new(question: &Question, number: usize, total: usize) -> Self {
        Self {
            id: question.id.clone(),
            text: question.text.clone(),
            hint: question.hint.clone(),
            number,
            total,
        }
    }
}

/// The resolved match, with the display fields the catalog carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessOutcome {
    pub item_id: ItemId,
    pub name: String,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub colors: Vec<String>,
    pub ai_impact: Option<String>,
    pub success_steps: Vec<String>,
    pub score: f64,
    pub questions_asked: usize,
    pub reason: GuessReason,
    /// True in guessing mode: the player is expected to confirm.
    pub awaiting_confirmation: bool,
}

impl GuessOutcome {
    pub(crate) fn new(
        item: &Item,
        score: f64,
        questions_asked: usize,
        reason: GuessReason,
        mode: PlayMode,
    ) -> Self {
        Self {
            item_id: item.id.clone(),
            name: item.name.clone(),
            icon: item.icon.clone(),
            description: item.description.clone(),
            colors: item.colors.clone(),
            ai_impact: item.ai_impact.clone(),
            success_steps: item.success_steps.clone(),
            score,
            questions_asked,
            reason,
            awaiting_confirmation: mode == PlayMode::Guessing,
        }
    }
}

/// The next thing to show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Turn {
    Ask(QuestionPrompt),
    Reveal(GuessOutcome),
}

impl Turn {
    pub fn prompt(&self) -> Option<&QuestionPrompt> {
        match self {
            Turn::Ask(prompt) => Some(prompt),
            Turn::Reveal(_) => None,
        }
    }

    pub fn outcome(&self) -> Option<&GuessOutcome> {
        match self {
            Turn::Reveal(outcome) => Some(outcome),
            Turn::Ask(_) => None,
        }
    }
}
