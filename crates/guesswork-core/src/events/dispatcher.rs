//! EventDispatcher: synchronous fan-out to registered handlers.

use std::sync::Arc;

use super::handler::RoundEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn RoundEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn RoundEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler is logged and does not stop later handlers.
    fn emit<F: Fn(&dyn RoundEventHandler)>(&self, event: &'static str, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!(event_name = event, "round event handler panicked");
            }
        }
    }

    pub fn emit_round_started(&self, event: &RoundStartedEvent) {
        self.emit("round_started", |h| h.on_round_started(event));
    }

    pub fn emit_question_dispensed(&self, event: &QuestionDispensedEvent) {
        self.emit("question_dispensed", |h| h.on_question_dispensed(event));
    }

    pub fn emit_answer_recorded(&self, event: &AnswerRecordedEvent) {
        self.emit("answer_recorded", |h| h.on_answer_recorded(event));
    }

    pub fn emit_guess_revealed(&self, event: &GuessRevealedEvent) {
        self.emit("guess_revealed", |h| h.on_guess_revealed(event));
    }

    pub fn emit_guess_confirmed(&self, event: &GuessConfirmedEvent) {
        self.emit("guess_confirmed", |h| h.on_guess_confirmed(event));
    }

    pub fn emit_future_shown(&self, event: &FutureShownEvent) {
        self.emit("future_shown", |h| h.on_future_shown(event));
    }

    pub fn emit_round_reset(&self, event: &RoundResetEvent) {
        self.emit("round_reset", |h| h.on_round_reset(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
