//! GameSession: one player, one engine, one round at a time.

use std::path::Path;
use std::sync::Arc;

use guesswork_core::answer::Answer;
use guesswork_core::catalog::Catalog;
use guesswork_core::config::{ConfigOverrides, GuessworkConfig, PlayMode};
use guesswork_core::errors::{ConfigError, EngineError, RoundError, SessionError};
use guesswork_core::events::{
    AnswerRecordedEvent, EventDispatcher, FutureShownEvent, GuessConfirmedEvent,
    GuessRevealedEvent, QuestionDispensedEvent, RoundEventHandler, RoundResetEvent, RoundStartedEvent,
};
use guesswork_engine::{GuessReason, MatchingEngine};
use tracing::{debug, info};

use crate::phase::GamePhase;
use crate::tally::PlayTally;
use crate::turn::{GuessOutcome, QuestionPrompt, Turn};

/// Round controller.
///
/// Owns the engine and sequences calls to it so the engine's preconditions
/// always hold: `should_guess` is checked before every selection, and each
/// dispensed question accepts exactly one answer.
#[derive(Debug)]
pub struct GameSession {
    engine: MatchingEngine,
    mode: PlayMode,
    phase: GamePhase,
    /// Set once the open question has been answered, cleared when the next
    /// question is dispensed.
    answer_locked: bool,
    tally: PlayTally,
    events: EventDispatcher,
    outcome: Option<GuessOutcome>,
}

impl GameSession {
    pub fn new(engine: MatchingEngine, mode: PlayMode) -> Self {
        Self {
            engine,
            mode,
            phase: GamePhase::Welcome,
            answer_locked: true,
            tally: PlayTally::default(),
            events: EventDispatcher::new(),
            outcome: None,
        }
    }

    /// Build the engine and controller from a resolved config.
    pub fn from_config(catalog: Catalog, config: &GuessworkConfig) -> Result<Self, EngineError> {
        let engine = MatchingEngine::from_config(catalog, config)?;
        Ok(Self::new(engine, config.session.effective_mode()))
    }

    /// Resolve `guesswork.toml` under `root`, load the catalog it names, and
    /// build a session from both.
    pub fn open(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, EngineError> {
        let config = GuessworkConfig::load(root, overrides)?;
        let relative = config
            .catalog
            .path
            .as_deref()
            .ok_or_else(|| ConfigError::ValidationFailed {
                field: "catalog.path".to_string(),
                message: "required to open a project".to_string(),
            })?;
        let catalog = Catalog::load(&root.join(relative))?;
        Self::from_config(catalog, &config)
    }

    /// Subscribe to round lifecycle events.
    pub fn register_handler(&mut self, handler: Arc<dyn RoundEventHandler>) {
        self.events.register(handler);
    }

    /// Begin a round and return the first turn.
    pub fn start(&mut self) -> Result<Turn, SessionError> {
        if !self.phase.can_start() {
            return Err(SessionError::AlreadyPlaying);
        }
        self.engine.reset();
        self.phase = GamePhase::Playing;
        self.answer_locked = true;
        self.outcome = None;
        self.tally.games_started += 1;

        info!(mode = %self.mode, games_started = self.tally.games_started, "round started");
        self.events.emit_round_started(&RoundStartedEvent {
            mode: self.mode,
            total_questions: self.engine.total_questions(),
        });
        Ok(self.advance())
    }

    /// Record the player's answer to the open question and return the next turn.
    pub fn answer(&mut self, answer: Answer) -> Result<Turn, SessionError> {
        self.record_answer(answer)?;
        self.next_turn()
    }

    /// Record an answer without advancing.
    ///
    /// For hosts that pause between the answer and the next question (an
    /// animation, a narration line). The question stays locked until
    /// [`next_turn`](Self::next_turn) dispenses another one.
    pub fn record_answer(&mut self, answer: Answer) -> Result<(), SessionError> {
        self.ensure_playing()?;
        if self.answer_locked {
            debug!("answer rejected: already recorded for this question");
            return Err(SessionError::AnswerLocked);
        }

        let question_id = self
            .engine
            .current_question()
            .map(|q| q.id.clone())
            .ok_or(RoundError::NoCurrentQuestion)?;
        self.engine.process_answer(answer)?;
        self.answer_locked = true;

        self.events.emit_answer_recorded(&AnswerRecordedEvent {
            question_id,
            answer,
        });
        Ok(())
    }

    /// Move past a recorded answer: the next question, or the reveal.
    ///
    /// While a question is still open this re-issues its prompt.
    pub fn next_turn(&mut self) -> Result<Turn, SessionError> {
        self.ensure_playing()?;
        match self.current_prompt() {
            Some(prompt) => Ok(Turn::Ask(prompt)),
            None => Ok(self.advance()),
        }
    }

    fn ensure_playing(&self) -> Result<(), SessionError> {
        if self.phase == GamePhase::Playing {
            Ok(())
        } else {
            Err(SessionError::NotPlaying {
                phase: self.phase.to_string(),
            })
        }
    }

    /// [`answer`](Self::answer) taking the host's nullable-number encoding.
    pub fn answer_value(&mut self, value: Option<f64>) -> Result<Turn, SessionError> {
        let answer = Answer::from_value(value)?;
        self.answer(answer)
    }

    /// Judge the revealed guess.
    ///
    /// Only a guess revealed in guessing mode can be judged; switching modes
    /// after the reveal does not change that.
    pub fn confirm(&mut self, correct: bool) -> Result<(), SessionError> {
        if self.phase != GamePhase::Revealed {
            return Err(if self.mode == PlayMode::Guessing {
                SessionError::NotAwaitingConfirmation {
                    phase: self.phase.to_string(),
                }
            } else {
                SessionError::ConfirmationUnsupported
            });
        }
        if !self.revealed_awaiting_confirmation() {
            return Err(SessionError::ConfirmationUnsupported);
        }

        self.phase = GamePhase::Confirmed;
        if correct {
            self.tally.confirmed_correct += 1;
        } else {
            self.tally.confirmed_wrong += 1;
        }

        let item_id = self.engine.get_guess().id.clone();
        info!(item = %item_id, correct, "guess confirmed");
        self.events
            .emit_guess_confirmed(&GuessConfirmedEvent { item_id, correct });
        Ok(())
    }

    /// Move from a discovery reveal to the outlook for the matched item.
    ///
    /// Returns the revealed outcome, whose `ai_impact` and `success_steps`
    /// make up the outlook.
    pub fn show_future(&mut self) -> Result<&GuessOutcome, SessionError> {
        if self.phase != GamePhase::Revealed {
            return Err(SessionError::NotRevealed {
                phase: self.phase.to_string(),
            });
        }
        if self.revealed_awaiting_confirmation() {
            return Err(SessionError::FutureUnsupported);
        }
        let Some(outcome) = self.outcome.as_ref() else {
            return Err(SessionError::NotRevealed {
                phase: self.phase.to_string(),
            });
        };

        self.phase = GamePhase::Future;
        info!(item = %outcome.item_id, steps = outcome.success_steps.len(), "future shown");
        self.events.emit_future_shown(&FutureShownEvent {
            item_id: outcome.item_id.clone(),
            success_steps: outcome.success_steps.len(),
        });
        Ok(outcome)
    }

    fn revealed_awaiting_confirmation(&self) -> bool {
        self.outcome
            .as_ref()
            .is_some_and(|o| o.awaiting_confirmation)
    }

    /// Abandon whatever is in progress and go back to the welcome phase.
    pub fn restart(&mut self) {
        let questions_asked = self.engine.questions_asked();
        self.engine.reset();
        self.phase = GamePhase::Welcome;
        self.answer_locked = true;
        self.outcome = None;

        debug!(questions_asked, "round reset");
        self.events
            .emit_round_reset(&RoundResetEvent { questions_asked });
    }

    fn advance(&mut self) -> Turn {
        if self.engine.should_guess() {
            return self.reveal();
        }
        let Some(question_id) = self.engine.select_question() else {
            return self.reveal();
        };
        self.answer_locked = false;

        let number = self.engine.questions_asked();
        let total = self.engine.total_questions();
        self.events.emit_question_dispensed(&QuestionDispensedEvent {
            question_id: question_id.clone(),
            number,
            total_questions: total,
        });

        let prompt = self
            .engine
            .question(question_id.as_str())
            .map(|q| QuestionPrompt::new(q, number, total));
        match prompt {
            Some(prompt) => Turn::Ask(prompt),
            None => self.reveal(),
        }
    }

    fn reveal(&mut self) -> Turn {
        let reason = self
            .engine
            .guess_reason()
            .unwrap_or(GuessReason::CatalogExhausted);
        let asked = self.engine.questions_asked();
        let item = self.engine.get_guess();
        let score = self.engine.score_of(item.id.as_str()).unwrap_or_default();
        let outcome = GuessOutcome::new(item, score, asked, reason, self.mode);

        self.phase = GamePhase::Revealed;
        self.answer_locked = true;
        self.tally.games_completed += 1;

        info!(
            item = %outcome.item_id,
            score,
            questions_asked = asked,
            ?reason,
            "guess revealed"
        );
        self.events.emit_guess_revealed(&GuessRevealedEvent {
            item_id: outcome.item_id.clone(),
            score,
            questions_asked: asked,
        });

        self.outcome = Some(outcome.clone());
        Turn::Reveal(outcome)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn mode(&self) -> PlayMode {
        self.mode
    }

    /// Switch modes. Takes effect from the next reveal; a guess already on
    /// screen keeps the mode it was revealed in.
    pub fn set_mode(&mut self, mode: PlayMode) {
        self.mode = mode;
    }

    pub fn tally(&self) -> &PlayTally {
        &self.tally
    }

    pub fn engine(&self) -> &MatchingEngine {
        &self.engine
    }

    /// True while a dispensed question is waiting for its answer.
    pub fn is_awaiting_answer(&self) -> bool {
        self.phase == GamePhase::Playing && !self.answer_locked
    }

    /// The open question, if one is waiting for an answer.
    pub fn current_prompt(&self) -> Option<QuestionPrompt> {
        if !self.is_awaiting_answer() {
            return None;
        }
        self.engine.current_question().map(|q| {
            QuestionPrompt::new(
                q,
                self.engine.questions_asked(),
                self.engine.total_questions(),
            )
        })
    }

    /// The most recent reveal of this round.
    pub fn outcome(&self) -> Option<&GuessOutcome> {
        self.outcome.as_ref()
    }
}
