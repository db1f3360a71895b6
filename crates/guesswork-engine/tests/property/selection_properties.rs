use guesswork_core::answer::Answer;
use guesswork_engine::selection::{imbalance, leading_set};
use guesswork_engine::{ranking, scoring};
use proptest::prelude::*;

use super::arb_answer;

fn arb_scores() -> impl Strategy<Value = Vec<f64>> {
    // Half-step grid so ties are common.
    prop::collection::vec((-8i32..=8).prop_map(|s| f64::from(s) / 2.0), 1..12)
}

proptest! {
    #[test]
    fn leading_set_holds_at_least_k_items(scores in arb_scores(), k in 1usize..6) {
        let leading = leading_set(&scores, k);
        prop_assert!(leading.len() >= k.min(scores.len()));
        prop_assert!(leading.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn no_outsider_beats_a_leader(scores in arb_scores(), k in 1usize..6) {
        let leading = leading_set(&scores, k);
        let worst_leader = leading
            .iter()
            .map(|&i| scores[i])
            .fold(f64::INFINITY, f64::min);
        for (i, &s) in scores.iter().enumerate() {
            if !leading.contains(&i) {
                prop_assert!(s < worst_leader);
            }
        }
    }

    #[test]
    fn imbalance_is_bounded_and_parity_matched(
        column in prop::collection::vec(any::<bool>(), 1..12),
    ) {
        let leading: Vec<usize> = (0..column.len()).collect();
        let imb = imbalance(&column, &leading);
        prop_assert!(imb <= leading.len());
        prop_assert_eq!(imb % 2, leading.len() % 2);
    }

    #[test]
    fn increment_sign_follows_answer_and_property(
        answer in arb_answer(),
        property in any::<bool>(),
    ) {
        let delta = scoring::increment(answer, property);
        prop_assert!(delta.abs() <= 1.0);
        match answer {
            Answer::Abstain => prop_assert_eq!(delta, 0.0),
            a if a.is_yes() == property => prop_assert!(delta > 0.0),
            _ => prop_assert!(delta < 0.0),
        }
    }

    #[test]
    fn margin_is_never_negative(scores in arb_scores()) {
        prop_assert!(ranking::margin(&scores) >= 0.0);
        let order = ranking::order(&scores);
        prop_assert_eq!(order[0], ranking::best(&scores));
    }
}
