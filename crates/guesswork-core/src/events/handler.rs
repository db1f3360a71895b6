//! RoundEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for handling round events.
///
/// Handlers only override the events they care about.
pub trait RoundEventHandler: Send + Sync {
    fn on_round_started(&self, _event: &RoundStartedEvent) {}
    fn on_question_dispensed(&self, _event: &QuestionDispensedEvent) {}
    fn on_answer_recorded(&self, _event: &AnswerRecordedEvent) {}
    fn on_guess_revealed(&self, _event: &GuessRevealedEvent) {}
    fn on_guess_confirmed(&self, _event: &GuessConfirmedEvent) {}
    fn on_future_shown(&self, _event: &FutureShownEvent) {}
    fn on_round_reset(&self, _event: &RoundResetEvent) {}
}
