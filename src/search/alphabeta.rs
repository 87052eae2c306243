//! Depth-limited minimax with alpha-beta pruning.
//!
//! The tree is walked depth-first in canonical move order (see
//! [`legal_moves`]). Finished positions are scored exactly; live positions
//! at the depth cutoff get [`DEPTH_CUTOFF_SCORE`] rather than an estimate.

use crate::board::{Position, Variant};
use crate::eval::{evaluate_terminal, Score, DEPTH_CUTOFF_SCORE, SCORE_INF};
use crate::movegen::{apply_generated, legal_moves};

/// Evaluates `position` with alpha-beta pruning.
///
/// `depth` counts the plies still allowed below this node. The terminal
/// check comes before the depth check, so a finished position is scored
/// even at depth 0.
pub fn minimax(
    position: &Position,
    depth: u32,
    maximizing: bool,
    alpha: Score,
    beta: Score,
    variant: Variant,
) -> Score {
    let mut nodes = 0;
    alpha_beta(position, depth, maximizing, alpha, beta, variant, &mut nodes)
}

/// Evaluates `position` without pruning, visiting every move.
///
/// Returns the same value as [`minimax`] called with a full window; kept as
/// the reference the pruned search is checked against.
pub fn full_width_minimax(
    position: &Position,
    depth: u32,
    maximizing: bool,
    variant: Variant,
) -> Score {
    if position.is_terminal() {
        return evaluate_terminal(position, variant);
    }
    if depth == 0 {
        return DEPTH_CUTOFF_SCORE;
    }

    let children = legal_moves(position)
        .into_iter()
        .map(|mv| apply_generated(position, mv))
        .map(|child| full_width_minimax(&child, depth - 1, !maximizing, variant));

    if maximizing {
        children.fold(-SCORE_INF, Score::max)
    } else {
        children.fold(SCORE_INF, Score::min)
    }
}

/// Alpha-beta core. Increments `nodes` once per visited position.
pub(crate) fn alpha_beta(
    position: &Position,
    depth: u32,
    maximizing: bool,
    mut alpha: Score,
    mut beta: Score,
    variant: Variant,
    nodes: &mut u64,
) -> Score {
    *nodes += 1;

    if position.is_terminal() {
        return evaluate_terminal(position, variant);
    }
    if depth == 0 {
        return DEPTH_CUTOFF_SCORE;
    }

    if maximizing {
        let mut max_eval = -SCORE_INF;
        for mv in legal_moves(position) {
            let child = apply_generated(position, mv);
            let eval = alpha_beta(&child, depth - 1, false, alpha, beta, variant, nodes);
            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = SCORE_INF;
        for mv in legal_moves(position) {
            let child = apply_generated(position, mv);
            let eval = alpha_beta(&child, depth - 1, true, alpha, beta, variant, nodes);
            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}
