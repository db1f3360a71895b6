//! # guesswork-engine
//!
//! The matching engine: owns per-item scores for one round, picks the next
//! question, decides when to stop, and names the best match.
//!
//! ## Round loop
//!
//! ```text
//! reset → [should_guess? → select_question → (caller asks) → process_answer]* → get_guess
//! ```
//!
//! ## Algorithm
//!
//! | Step | Rule |
//! |------|------|
//! | Scoring | `score += (2v − 1) × (property ? 1 : −1)`, abstain adds 0 |
//! | Leading set | top-K items by score, ties at the K-th score included |
//! | Selection | unasked question whose property splits the leading set most evenly; earliest declared wins ties |
//! | Termination | first of: every question asked, margin > threshold, asked ≥ cap |
//! | Guess | highest score; earliest declared item wins ties |
//!
//! The engine performs no I/O and holds no timers. Callers may wait as long
//! as they like between `select_question` and `process_answer`.

pub mod engine;
pub mod matrix;
pub mod ranking;
pub mod scoring;
pub mod selection;
pub mod state;
pub mod termination;

pub use engine::MatchingEngine;
pub use ranking::RankedItem;
pub use state::{RoundPhase, RoundSnapshot};
pub use termination::{GuessPolicy, GuessReason};
