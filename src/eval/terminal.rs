//! Terminal position scoring.
//!
//! Each marble left at the end is worth points (red 2, blue 3). The
//! variant only decides the sign: misère reports the raw total, standard
//! its negation. Both come from the single `signed_score` so the two
//! variants cannot drift apart.

use crate::board::{Pile, Position, Variant};

/// Search score. Wide enough for `5 * u32::MAX`, the largest raw score.
pub type Score = i64;

/// Stand-in for infinity in alpha-beta windows and running extremes.
pub const SCORE_INF: Score = Score::MAX;

/// Value returned when the depth bound runs out on a non-terminal position.
pub const DEPTH_CUTOFF_SCORE: Score = 0;

/// Points for the marbles left: `2 * red + 3 * blue`.
pub fn raw_score(position: &Position) -> Score {
    let red = Score::from(position.red()) * Pile::Red.marble_value();
    let blue = Score::from(position.blue()) * Pile::Blue.marble_value();
    red + blue
}

/// Applies the variant's sign to a raw score.
pub const fn signed_score(raw: Score, variant: Variant) -> Score {
    match variant {
        Variant::Misere => raw,
        Variant::Standard => -raw,
    }
}

/// Scores a finished position under `variant`.
///
/// Meant for terminal positions; the search never calls it elsewhere.
pub fn evaluate_terminal(position: &Position, variant: Variant) -> Score {
    debug_assert!(position.is_terminal(), "evaluating live position {position:?}");
    signed_score(raw_score(position), variant)
}
