//! MatchingEngine: owns one round of scoring state over an immutable catalog.

use guesswork_core::answer::Answer;
use guesswork_core::catalog::{AuditReport, Catalog, Item, Question};
use guesswork_core::config::{EngineConfig, GuessworkConfig};
use guesswork_core::constants;
use guesswork_core::errors::{EngineError, RoundError};
use guesswork_core::types::QuestionId;
use tracing::{debug, info, warn};

use crate::matrix::PropertyMatrix;
use crate::ranking::{self, RankedItem};
use crate::scoring;
use crate::selection;
use crate::state::{RoundPhase, RoundSnapshot, RoundState};
use crate::termination::{GuessPolicy, GuessReason};

/// The matching engine.
///
/// Construct one per concurrent round. The catalog and config are fixed for
/// the engine's lifetime; everything else is round state cleared by `reset`.
#[derive(Debug, Clone)]
pub struct MatchingEngine {
    catalog: Catalog,
    matrix: PropertyMatrix,
    config: EngineConfig,
    policy: GuessPolicy,
    leading_set_size: usize,
    audit: AuditReport,
    round: RoundState,
}

impl MatchingEngine {
    /// Validate the catalog and config and build a fresh engine.
    pub fn new(catalog: Catalog, config: EngineConfig) -> Result<Self, EngineError> {
        Self::with_audit_rule(catalog, config, constants::DEFAULT_MIN_PROPERTY_DIFFERENCES)
    }

    /// Build from a fully resolved [`GuessworkConfig`].
    pub fn from_config(catalog: Catalog, config: &GuessworkConfig) -> Result<Self, EngineError> {
        Self::with_audit_rule(
            catalog,
            config.engine.clone(),
            config.catalog.effective_min_property_differences(),
        )
    }

    /// Build with an explicit minimum-difference rule for the catalog audit.
    pub fn with_audit_rule(
        catalog: Catalog,
        config: EngineConfig,
        min_property_differences: usize,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        catalog.validate()?;
        let matrix = PropertyMatrix::build(&catalog)?;

        let audit = catalog.audit(min_property_differences);
        for pair in &audit.close_pairs {
            warn!(
                first = %pair.first,
                second = %pair.second,
                differences = pair.differences,
                required = min_property_differences,
                "items are hard to tell apart"
            );
        }
        for property in &audit.constant_properties {
            warn!(%property, "every item shares this property; its questions cannot discriminate");
        }

        let round = RoundState::fresh(catalog.item_count(), catalog.question_count());
        let engine = Self {
            policy: GuessPolicy::from_config(&config),
            leading_set_size: config.effective_leading_set_size(),
            catalog,
            matrix,
            config,
            audit,
            round,
        };

        info!(
            items = engine.catalog.item_count(),
            questions = engine.catalog.question_count(),
            margin_threshold = engine.policy.margin_threshold,
            max_questions = engine.policy.max_questions,
            leading_set_size = engine.leading_set_size,
            "matching engine ready"
        );
        Ok(engine)
    }

    /// Start a new round: zero every score, forget every asked question.
    pub fn reset(&mut self) {
        debug!(
            questions_asked = self.round.asked.len(),
            "resetting round"
        );
        self.round = RoundState::fresh(self.catalog.item_count(), self.catalog.question_count());
    }

    /// Size of the question catalog.
    pub fn total_questions(&self) -> usize {
        self.catalog.question_count()
    }

    /// Questions dispensed this round.
    pub fn questions_asked(&self) -> usize {
        self.round.asked.len()
    }

    /// Answers processed this round.
    pub fn questions_answered(&self) -> usize {
        self.round.answered
    }

    /// True once the round should resolve. See [`GuessPolicy::evaluate`].
    pub fn should_guess(&self) -> bool {
        self.guess_reason().is_some()
    }

    /// Why `should_guess` is true, if it is.
    pub fn guess_reason(&self) -> Option<GuessReason> {
        self.policy.evaluate(
            self.questions_asked(),
            self.total_questions(),
            self.confidence_margin(),
        )
    }

    /// Dispense the next question and mark it asked.
    ///
    /// Returns `None` when every question has been asked. Not idempotent:
    /// two calls without an answer in between dispense two questions, and
    /// only the second one can still be answered.
    pub fn select_question(&mut self) -> Option<QuestionId> {
        let candidate = selection::select(
            &self.matrix,
            &self.round.scores,
            &self.round.asked_mask,
            self.leading_set_size,
        )?;
        self.round.mark_asked(candidate.question);

        let question = &self.catalog.questions[candidate.question];
        debug!(
            question = %question.id,
            property = %question.property,
            imbalance = candidate.imbalance,
            leading = candidate.leading,
            asked = self.round.asked.len(),
            "question selected"
        );
        Some(question.id.clone())
    }

    /// [`select_question`](Self::select_question), with exhaustion as an error.
    pub fn try_select_question(&mut self) -> Result<QuestionId, RoundError> {
        self.select_question().ok_or(RoundError::CatalogExhausted)
    }

    /// Apply an answer to the current question and close it.
    pub fn process_answer(&mut self, answer: Answer) -> Result<(), RoundError> {
        let question = self.round.current.take().ok_or(RoundError::NoCurrentQuestion)?;
        scoring::apply(&mut self.round.scores, self.matrix.column(question), answer);
        self.round.answered += 1;

        debug!(
            question = %self.catalog.questions[question].id,
            %answer,
            answered = self.round.answered,
            margin = self.confidence_margin(),
            "answer processed"
        );
        Ok(())
    }

    /// The item with the highest score; the earliest declared item on ties.
    pub fn get_guess(&self) -> &Item {
        let best = ranking::best(&self.round.scores);
        let item = &self.catalog.items[best];
        debug!(
            item = %item.id,
            score = self.round.scores[best],
            questions_asked = self.round.asked.len(),
            "guess computed"
        );
        item
    }

    /// All items ordered by score, earliest declared first on ties.
    pub fn ranking(&self) -> Vec<RankedItem> {
        ranking::order(&self.round.scores)
            .into_iter()
            .enumerate()
            .map(|(rank, i)| RankedItem {
                item_id: self.catalog.items[i].id.clone(),
                score: self.round.scores[i],
                rank,
            })
            .collect()
    }

    /// Current score of an item.
    pub fn score_of(&self, item_id: &str) -> Option<f64> {
        self.catalog
            .item_index(item_id)
            .map(|i| self.round.scores[i])
    }

    /// Top score minus runner-up. Infinite for a single-item catalog.
    pub fn confidence_margin(&self) -> f64 {
        ranking::margin(&self.round.scores)
    }

    /// The question awaiting an answer, if any.
    pub fn current_question(&self) -> Option<&Question> {
        self.round.current.map(|q| &self.catalog.questions[q])
    }

    /// Questions dispensed this round, in dispense order.
    pub fn asked_questions(&self) -> impl Iterator<Item = &Question> + '_ {
        self.round.asked.iter().map(|&q| &self.catalog.questions[q])
    }

    pub fn phase(&self) -> RoundPhase {
        if self.round.is_fresh() {
            RoundPhase::Fresh
        } else if self.should_guess() {
            RoundPhase::ReadyToGuess
        } else {
            RoundPhase::InProgress
        }
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.catalog.question(id)
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.catalog.item(id)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Findings of the construction-time catalog audit.
    pub fn audit(&self) -> &AuditReport {
        &self.audit
    }

    /// Serializable view of the round.
    pub fn snapshot(&self) -> RoundSnapshot {
        let margin = self.confidence_margin();
        RoundSnapshot {
            phase: self.phase(),
            questions_asked: self.questions_asked(),
            questions_answered: self.questions_answered(),
            total_questions: self.total_questions(),
            asked: self.asked_questions().map(|q| q.id.clone()).collect(),
            current: self.current_question().map(|q| q.id.clone()),
            ranking: self.ranking(),
            margin: margin.is_finite().then_some(margin),
            guess_reason: self.guess_reason(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guesswork_core::errors::CatalogError;
    use guesswork_core::types::PropertyKey;

    fn item(id: &str, props: &[(&str, bool)]) -> Item {
        Item::new(id, id, props.iter().map(|(k, v)| (PropertyKey::new(*k), *v)))
    }

    fn two_by_two() -> Catalog {
        Catalog::new(
            vec![
                item("cat", &[("fur", true), ("swims", false)]),
                item("fish", &[("fur", false), ("swims", true)]),
            ],
            vec![
                Question::new("q-fur", "Does it have fur?", "fur"),
                Question::new("q-swims", "Does it swim?", "swims"),
            ],
        )
    }

    #[test]
    fn construction_rejects_invalid_config() {
        let config = EngineConfig::default().with_leading_set_size(0);
        assert!(matches!(
            MatchingEngine::new(two_by_two(), config),
            Err(EngineError::Config(_))
        ));
    }

    #[test]
    fn construction_rejects_empty_catalog() {
        let catalog = Catalog::new(vec![], vec![]);
        assert!(matches!(
            MatchingEngine::new(catalog, EngineConfig::default()),
            Err(EngineError::Catalog(CatalogError::EmptyItems))
        ));
    }

    #[test]
    fn answer_without_question_is_misuse() {
        let mut engine = MatchingEngine::new(two_by_two(), EngineConfig::default()).unwrap();
        assert_eq!(
            engine.process_answer(Answer::StrongYes),
            Err(RoundError::NoCurrentQuestion)
        );
        engine.select_question().unwrap();
        engine.process_answer(Answer::StrongYes).unwrap();
        assert_eq!(
            engine.process_answer(Answer::StrongYes),
            Err(RoundError::NoCurrentQuestion)
        );
        assert_eq!(engine.questions_answered(), 1);
    }

    #[test]
    fn exhaustion_returns_sentinel_then_error() {
        let mut engine = MatchingEngine::new(two_by_two(), EngineConfig::default()).unwrap();
        assert!(engine.select_question().is_some());
        assert!(engine.select_question().is_some());
        assert_eq!(engine.select_question(), None);
        assert_eq!(engine.try_select_question(), Err(RoundError::CatalogExhausted));
        assert_eq!(engine.questions_asked(), 2);
    }

    #[test]
    fn phase_tracks_round_progress() {
        let config = EngineConfig::default().with_margin_threshold(1.0);
        let mut engine = MatchingEngine::new(two_by_two(), config).unwrap();
        assert_eq!(engine.phase(), RoundPhase::Fresh);

        engine.select_question().unwrap();
        assert_eq!(engine.phase(), RoundPhase::InProgress);

        // One strong answer moves the two items 2.0 apart.
        engine.process_answer(Answer::StrongYes).unwrap();
        assert_eq!(engine.phase(), RoundPhase::ReadyToGuess);
        assert_eq!(engine.guess_reason(), Some(GuessReason::MarginReached));

        engine.reset();
        assert_eq!(engine.phase(), RoundPhase::Fresh);
    }

    #[test]
    fn single_item_catalog_is_decided_immediately() {
        let catalog = Catalog::new(
            vec![item("only", &[("p", true)])],
            vec![Question::new("q1", "P?", "p")],
        );
        let engine = MatchingEngine::new(catalog, EngineConfig::default()).unwrap();
        assert!(engine.should_guess());
        assert_eq!(engine.get_guess().id.as_str(), "only");
        assert_eq!(engine.snapshot().margin, None);
    }

    #[test]
    fn snapshot_reflects_round() {
        let mut engine = MatchingEngine::new(two_by_two(), EngineConfig::default()).unwrap();
        let first = engine.select_question().unwrap();
        engine.process_answer(Answer::LeanNo).unwrap();
        engine.select_question().unwrap();

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.questions_asked, 2);
        assert_eq!(snapshot.questions_answered, 1);
        assert_eq!(snapshot.asked[0], first);
        assert!(snapshot.current.is_some());
        assert_eq!(snapshot.ranking.len(), 2);
        assert_eq!(snapshot.margin, Some(1.0));
        assert_eq!(snapshot.guess_reason, Some(GuessReason::CatalogExhausted));
    }
}
