//! Score ordering, confidence margin, and best-item selection.
//!
//! Every ordering here is total: higher score first, then earlier
//! declaration. The same inputs always produce the same ranking.

use serde::{Deserialize, Serialize};

use guesswork_core::types::ItemId;

/// One row of the current ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedItem {
    pub item_id: ItemId,
    pub score: f64,
    /// 0-based position in the ranking.
    pub rank: usize,
}

/// Item indices ordered by score descending, declaration order on ties.
pub fn order(scores: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    indices.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));
    indices
}

/// Index of the best item: highest score, earliest declared on ties.
///
/// Returns 0 for an empty slice; callers guarantee at least one item.
pub fn best(scores: &[f64]) -> usize {
    let mut best = 0;
    for (i, &score) in scores.iter().enumerate().skip(1) {
        if score > scores[best] {
            best = i;
        }
    }
    best
}

/// Gap between the top score and the runner-up.
///
/// With a single item there is no runner-up and the outcome is never in
/// doubt, so the margin is infinite.
pub fn margin(scores: &[f64]) -> f64 {
    let mut top = f64::NEG_INFINITY;
    let mut second = f64::NEG_INFINITY;
    for &score in scores {
        if score > top {
            second = top;
            top = score;
        } else if score > second {
            second = score;
        }
    }
    if scores.len() < 2 {
        f64::INFINITY
    } else {
        top - second
    }
}
