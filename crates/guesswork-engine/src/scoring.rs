//! Answer → score increments.
//!
//! ```text
//! increment = (2v − 1) × (property ? 1 : −1)      v ∈ {1, 0.75, 0.25, 0}
//! increment = 0                                    abstain
//! ```
//!
//! Monotonic in confidence, symmetric between yes and no, zero for abstain.

use guesswork_core::answer::Answer;

/// Score change for one item given its property value.
pub fn increment(answer: Answer, property: bool) -> f64 {
    match answer.signed_confidence() {
        Some(c) if property => c,
        Some(c) => -c,
        None => 0.0,
    }
}

/// Apply an answer to every item's score.
pub fn apply(scores: &mut [f64], column: &[bool], answer: Answer) {
    if answer == Answer::Abstain {
        return;
    }
    for (score, &property) in scores.iter_mut().zip(column) {
        *score += increment(answer, property);
    }
}
