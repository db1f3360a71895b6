//! Round controller configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a resolved round is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlayMode {
    /// Reveal the match directly.
    #[default]
    Discovery,
    /// Present the guess and ask the player to confirm it.
    Guessing,
}

impl FromStr for PlayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "discovery" => Ok(PlayMode::Discovery),
            "guessing" => Ok(PlayMode::Guessing),
            other => Err(format!("unknown play mode: {other}")),
        }
    }
}

impl fmt::Display for PlayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayMode::Discovery => f.write_str("discovery"),
            PlayMode::Guessing => f.write_str("guessing"),
        }
    }
}

/// Configuration for the round controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SessionConfig {
    /// Play mode. Default: discovery.
    pub mode: Option<PlayMode>,
}

impl SessionConfig {
    /// Returns the effective play mode, defaulting to discovery.
    pub fn effective_mode(&self) -> PlayMode {
        self.mode.unwrap_or_default()
    }
}
