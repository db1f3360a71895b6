use std::fmt;

use serde::{Deserialize, Serialize};

/// Where the controller is in the round lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// No round started yet, or the player restarted.
    #[default]
    Welcome,
    /// Questions are being asked.
    Playing,
    /// The guess is on screen.
    Revealed,
    /// The player judged the guess (guessing mode only).
    Confirmed,
    /// The outlook for the revealed match (discovery mode only).
    Future,
}

impl GamePhase {
    /// Returns true if `start` is allowed from this phase.
    pub fn can_start(self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GamePhase::Welcome => "welcome",
            GamePhase::Playing => "playing",
            GamePhase::Revealed => "revealed",
            GamePhase::Confirmed => "confirmed",
            GamePhase::Future => "future",
        };
        f.write_str(name)
    }
}
