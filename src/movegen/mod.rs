//! Legal move generation.
//!
//! Enumerates the moves available from a position and applies them. The
//! order moves come out in is part of the search's contract: alpha-beta
//! cutoffs and tie-breaks depend on it.

use rand::Rng;

use crate::board::{Move, Position, ALL_PILES, MOVE_AMOUNTS};
use crate::error::NimError;

/// Returns every legal move from `position` in canonical order.
///
/// Larger removals come first; within an amount, red comes before blue:
/// `red 2, blue 2, red 1, blue 1`, skipping any move whose pile is too
/// small. Empty only when both piles are empty.
pub fn legal_moves(position: &Position) -> Vec<Move> {
    let mut moves = Vec::with_capacity(4);
    for amount in MOVE_AMOUNTS {
        for pile in ALL_PILES {
            if position.count(pile) >= amount {
                moves.push(Move::new(pile, amount));
            }
        }
    }
    moves
}

/// Returns the legal moves in the order the top-level search tries them.
///
/// Smaller removals come first here (`red 1, blue 1, red 2, blue 2`),
/// the reverse of [`legal_moves`] on the amount axis.
pub fn root_moves(position: &Position) -> Vec<Move> {
    let mut moves = Vec::with_capacity(4);
    for amount in MOVE_AMOUNTS.iter().rev().copied() {
        for pile in ALL_PILES {
            if position.count(pile) >= amount {
                moves.push(Move::new(pile, amount));
            }
        }
    }
    moves
}

/// Returns true if `mv` may be played from `position`.
pub(crate) fn is_legal(position: &Position, mv: Move) -> bool {
    MOVE_AMOUNTS.contains(&mv.amount) && position.count(mv.pile) >= mv.amount
}

/// Applies `mv` to `position`, returning the resulting position.
///
/// Fails with [`NimError::InvalidMove`] if the amount is not 1 or 2 or
/// exceeds the pile.
pub fn apply_move(position: &Position, mv: Move) -> Result<Position, NimError> {
    let available = position.count(mv.pile);
    if !is_legal(position, mv) {
        return Err(NimError::InvalidMove {
            pile: mv.pile,
            amount: mv.amount,
            available,
        });
    }
    Ok(position.with_count(mv.pile, available - mv.amount))
}

/// Applies a move taken from [`legal_moves`], skipping the legality check.
pub(crate) fn apply_generated(position: &Position, mv: Move) -> Position {
    debug_assert!(is_legal(position, mv), "generated illegal move {mv}");
    position.with_count(mv.pile, position.count(mv.pile) - mv.amount)
}

/// Picks a uniformly random legal move, or `None` if there is none.
pub fn random_move(position: &Position, rng: &mut impl Rng) -> Option<Move> {
    let moves = legal_moves(position);
    if moves.is_empty() {
        return None;
    }
    let idx = rng.gen_range(0..moves.len());
    Some(moves[idx])
}
