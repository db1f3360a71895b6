//! Player answers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::RoundError;

/// One of the five admissible answers to a question.
///
/// The host encoding is a nullable number: `1`, `0.75`, `0.25`, `0`, or `null`.
/// `Abstain` carries no information and never moves a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    StrongYes,
    LeanYes,
    LeanNo,
    StrongNo,
    Abstain,
}

impl Answer {
    /// All answers in button order.
    pub const ALL: [Answer; 5] = [
        Answer::StrongYes,
        Answer::LeanYes,
        Answer::LeanNo,
        Answer::StrongNo,
        Answer::Abstain,
    ];

    /// Numeric value of the answer, `None` for abstain.
    pub fn value(self) -> Option<f64> {
        match self {
            Answer::StrongYes => Some(1.0),
            Answer::LeanYes => Some(0.75),
            Answer::LeanNo => Some(0.25),
            Answer::StrongNo => Some(0.0),
            Answer::Abstain => None,
        }
    }

    /// Signed confidence in [-1.0, 1.0]: positive leans yes, negative leans no.
    ///
    /// `None` for abstain.
    pub fn signed_confidence(self) -> Option<f64> {
        self.value().map(|v| 2.0 * v - 1.0)
    }

    /// Parse the host's nullable-number encoding.
    pub fn from_value(value: Option<f64>) -> Result<Self, RoundError> {
        let Some(v) = value else {
            return Ok(Answer::Abstain);
        };
        Self::ALL
            .into_iter()
            .find(|a| a.value() == Some(v))
            .ok_or(RoundError::InvalidAnswerValue { value: v })
    }

    /// Returns true for the two yes-leaning answers.
    pub fn is_yes(self) -> bool {
        matches!(self, Answer::StrongYes | Answer::LeanYes)
    }

    /// Returns true for the two no-leaning answers.
    pub fn is_no(self) -> bool {
        matches!(self, Answer::LeanNo | Answer::StrongNo)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Answer::StrongYes => "yes",
            Answer::LeanYes => "probably",
            Answer::LeanNo => "probably not",
            Answer::StrongNo => "no",
            Answer::Abstain => "not sure",
        };
        f.write_str(label)
    }
}
