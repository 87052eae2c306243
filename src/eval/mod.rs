//! Position evaluation.
//!
//! Scores finished positions for the search. There is no static evaluator
//! for live positions; the search substitutes a neutral value at its depth
//! cutoff instead.

pub(crate) mod terminal;

pub use terminal::{
    evaluate_terminal, raw_score, signed_score, Score, DEPTH_CUTOFF_SCORE, SCORE_INF,
};
