//! In-memory play counters. Nothing is persisted.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayTally {
    pub games_started: u64,
    /// Rounds that reached a reveal.
    pub games_completed: u64,
    pub confirmed_correct: u64,
    pub confirmed_wrong: u64,
}

impl PlayTally {
    /// Rounds started but abandoned before the reveal.
    pub fn abandoned(&self) -> u64 {
        self.games_started.saturating_sub(self.games_completed)
    }

    /// Share of confirmed guesses that were correct, `None` before any confirmation.
    pub fn accuracy(&self) -> Option<f64> {
        let confirmed = self.confirmed_correct + self.confirmed_wrong;
        (confirmed > 0).then(|| self.confirmed_correct as f64 / confirmed as f64)
    }
}
