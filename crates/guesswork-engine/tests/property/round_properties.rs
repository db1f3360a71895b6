use std::collections::HashSet;

use guesswork_core::answer::Answer;
use guesswork_engine::{MatchingEngine, RoundPhase};
use proptest::prelude::*;

use super::{
    arb_answer, arb_catalog, arb_config, arb_contested_catalog, arb_script, exhaustive_config,
    play, scores,
};

// ── Determinism ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn identical_inputs_identical_rounds(
        catalog in arb_catalog(),
        config in arb_config(),
        script in arb_script(),
    ) {
        let mut a = MatchingEngine::new(catalog.clone(), config.clone()).unwrap();
        let mut b = MatchingEngine::new(catalog, config).unwrap();

        prop_assert_eq!(play(&mut a, &script), play(&mut b, &script));
        prop_assert_eq!(&a.get_guess().id, &b.get_guess().id);
        prop_assert_eq!(scores(&a), scores(&b));
    }
}

// ── Reset isolation ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn reset_forgets_the_previous_round(
        catalog in arb_catalog(),
        config in arb_config(),
        first in arb_script(),
        second in arb_script(),
    ) {
        let mut reused = MatchingEngine::new(catalog.clone(), config.clone()).unwrap();
        play(&mut reused, &first);
        reused.reset();
        prop_assert_eq!(reused.phase(), RoundPhase::Fresh);

        let mut fresh = MatchingEngine::new(catalog, config).unwrap();
        prop_assert_eq!(play(&mut reused, &second), play(&mut fresh, &second));
        prop_assert_eq!(&reused.get_guess().id, &fresh.get_guess().id);
        prop_assert_eq!(scores(&reused), scores(&fresh));
    }
}

// ── Abstain neutrality ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn abstain_never_moves_a_score(
        catalog in arb_catalog(),
        script in arb_script(),
    ) {
        let mut engine = MatchingEngine::new(catalog, exhaustive_config()).unwrap();
        for answer in script {
            if engine.select_question().is_none() {
                break;
            }
            let before = scores(&engine);
            engine.process_answer(answer).unwrap();
            if answer == Answer::Abstain {
                prop_assert_eq!(scores(&engine), before);
            }
        }
    }

    #[test]
    fn all_abstain_round_guesses_first_item(catalog in arb_contested_catalog()) {
        let mut engine = MatchingEngine::new(catalog, exhaustive_config()).unwrap();
        let asked = play(&mut engine, &[Answer::Abstain]);

        prop_assert_eq!(asked.len(), engine.total_questions());
        prop_assert!(scores(&engine).iter().all(|&s| s == 0.0));
        let first = &engine.catalog().items[0].id;
        prop_assert_eq!(&engine.get_guess().id, first);
    }
}

// ── Exhaustion and counting ──────────────────────────────────────────────

proptest! {
    #[test]
    fn exhaustion_dispenses_every_question_once(
        catalog in arb_contested_catalog(),
        script in arb_script(),
    ) {
        let mut engine = MatchingEngine::new(catalog, exhaustive_config()).unwrap();
        let asked = play(&mut engine, &script);

        prop_assert_eq!(asked.len(), engine.total_questions());
        let distinct: HashSet<_> = asked.iter().collect();
        prop_assert_eq!(distinct.len(), asked.len());
        prop_assert!(engine.should_guess());
        prop_assert_eq!(engine.select_question(), None);
        prop_assert_eq!(engine.questions_asked(), engine.total_questions());
    }

    #[test]
    fn question_count_moves_only_on_select(
        catalog in arb_catalog(),
        config in arb_config(),
        script in arb_script(),
    ) {
        let mut engine = MatchingEngine::new(catalog, config).unwrap();
        let total = engine.total_questions();
        for answer in script {
            let before = engine.questions_asked();
            match engine.select_question() {
                Some(_) => prop_assert_eq!(engine.questions_asked(), before + 1),
                None => prop_assert_eq!(engine.questions_asked(), before),
            }
            let selected = engine.questions_asked();
            let _ = engine.process_answer(answer);
            prop_assert_eq!(engine.questions_asked(), selected);
            prop_assert!(engine.questions_asked() <= total);
        }
    }

    #[test]
    fn round_ends_within_cap_and_catalog(
        catalog in arb_catalog(),
        config in arb_config(),
        script in arb_script(),
    ) {
        let cap = config.effective_max_questions();
        let mut engine = MatchingEngine::new(catalog, config).unwrap();
        let asked = play(&mut engine, &script);
        prop_assert!(asked.len() <= cap.min(engine.total_questions()));
        prop_assert!(engine.should_guess());
    }
}

// ── Tie-break stability ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn guess_is_earliest_top_scorer(
        catalog in arb_catalog(),
        config in arb_config(),
        script in prop::collection::vec(arb_answer(), 1..16),
    ) {
        let mut engine = MatchingEngine::new(catalog, config).unwrap();
        play(&mut engine, &script);

        let scores = scores(&engine);
        let top = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let first_top = scores.iter().position(|&s| s == top).unwrap();
        prop_assert_eq!(&engine.get_guess().id, &engine.catalog().items[first_top].id);
        prop_assert_eq!(&engine.ranking()[0].item_id, &engine.catalog().items[first_top].id);
    }
}
