//! Property tests over randomly generated catalogs and answer scripts.

mod round_properties;
mod selection_properties;

use std::ops::RangeInclusive;

use guesswork_core::answer::Answer;
use guesswork_core::catalog::Catalog;
use guesswork_core::config::EngineConfig;
use guesswork_core::types::QuestionId;
use guesswork_engine::MatchingEngine;
use proptest::prelude::*;

pub fn arb_answer() -> impl Strategy<Value = Answer> {
    prop_oneof![
        Just(Answer::StrongYes),
        Just(Answer::LeanYes),
        Just(Answer::LeanNo),
        Just(Answer::StrongNo),
        Just(Answer::Abstain),
    ]
}

/// A non-empty item × property grid plus a few repeated questions.
pub fn arb_catalog() -> impl Strategy<Value = Catalog> {
    arb_catalog_sized(1..=8)
}

/// At least two items, so the margin is always finite.
pub fn arb_contested_catalog() -> impl Strategy<Value = Catalog> {
    arb_catalog_sized(2..=8)
}

fn arb_catalog_sized(items: RangeInclusive<usize>) -> impl Strategy<Value = Catalog> {
    (items, 1usize..=6)
        .prop_flat_map(|(items, props)| {
            (
                prop::collection::vec(prop::collection::vec(any::<bool>(), props), items),
                prop::collection::vec(0..props, 0..4),
            )
        })
        .prop_map(|(grid, repeats)| test_fixtures::grid_catalog(&grid, &repeats))
}

pub fn arb_script() -> impl Strategy<Value = Vec<Answer>> {
    prop::collection::vec(arb_answer(), 1..16)
}

pub fn arb_config() -> impl Strategy<Value = EngineConfig> {
    (0.0f64..8.0, 1usize..=20, 1usize..=5).prop_map(|(threshold, cap, k)| {
        EngineConfig::default()
            .with_margin_threshold(threshold)
            .with_max_questions(cap)
            .with_leading_set_size(k)
    })
}

/// Never stops early on a contested catalog: only exhaustion ends the round.
pub fn exhaustive_config() -> EngineConfig {
    EngineConfig::default()
        .with_margin_threshold(f64::MAX)
        .with_max_questions(usize::MAX)
}

pub fn scores(engine: &MatchingEngine) -> Vec<f64> {
    engine
        .catalog()
        .items
        .iter()
        .map(|item| engine.score_of(item.id.as_str()).unwrap_or(f64::NAN))
        .collect()
}

/// Play until the engine wants to guess, cycling through `script`.
pub fn play(engine: &mut MatchingEngine, script: &[Answer]) -> Vec<QuestionId> {
    let mut asked = Vec::new();
    let mut answers = script.iter().cycle();
    while !engine.should_guess() {
        let Some(question) = engine.select_question() else {
            break;
        };
        let answer = answers.next().copied().unwrap_or(Answer::Abstain);
        engine.process_answer(answer).unwrap();
        asked.push(question);
    }
    asked
}
