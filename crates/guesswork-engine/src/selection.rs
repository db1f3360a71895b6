//! Next-question selection.
//!
//! A candidate question is scored by how evenly its property splits the
//! leading set. An even split separates the leaders whichever way the player
//! answers. Imbalance is kept in integer form (`|2t − n|`) so equal splits
//! compare exactly.

use crate::matrix::PropertyMatrix;
use crate::ranking;

/// The winning candidate of one selection pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Declaration index of the question.
    pub question: usize,
    /// `|2t − n|`: 0 is a perfect split, `n` means every leader agrees.
    pub imbalance: usize,
    /// Size of the leading set it was measured against.
    pub leading: usize,
}

/// Items currently in contention, in declaration order.
///
/// The top `k` items by score, plus any item tied with the k-th score.
/// While every score is equal this is the whole catalog.
pub fn leading_set(scores: &[f64], k: usize) -> Vec<usize> {
    if scores.is_empty() {
        return Vec::new();
    }
    let order = ranking::order(scores);
    let cutoff = scores[order[k.clamp(1, scores.len()) - 1]];
    (0..scores.len()).filter(|&i| scores[i] >= cutoff).collect()
}

/// `|2t − n|` where `t` counts leaders whose property is true.
pub fn imbalance(column: &[bool], leading: &[usize]) -> usize {
    let t = leading.iter().filter(|&&i| column[i]).count();
    (2 * t).abs_diff(leading.len())
}

/// Pick the unasked question that best splits the leading set.
///
/// Returns `None` when every question has been asked.
pub fn select(
    matrix: &PropertyMatrix,
    scores: &[f64],
    asked: &[bool],
    k: usize,
) -> Option<Candidate> {
    let leading = leading_set(scores, k);
    let mut best: Option<Candidate> = None;
    for question in (0..matrix.question_count()).filter(|&q| !asked[q]) {
        let imbalance = imbalance(matrix.column(question), &leading);
        // Strict comparison keeps the earliest question on ties.
        if best.map_or(true, |b| imbalance < b.imbalance) {
            best = Some(Candidate {
                question,
                imbalance,
                leading: leading.len(),
            });
        }
    }
    best
}
