//! # guesswork-session
//!
//! Round controller on top of the matching engine. Drives one player through
//! welcome → questions → reveal and enforces one answer per question.
//! Guessing mode adds a confirmation step after the reveal.

pub mod game;
pub mod phase;
pub mod tally;
pub mod turn;

pub use game::GameSession;
pub use phase::GamePhase;
pub use tally::PlayTally;
pub use turn::{GuessOutcome, QuestionPrompt, Turn};
