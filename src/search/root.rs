//! Top-level move selection.
//!
//! The root tries moves in [`root_moves`] order and scores each child as a
//! minimizing node. Standard play keeps the highest score, misère the
//! lowest; ties keep the earlier move. Every root child gets a fresh full
//! alpha-beta window.

use std::io::Write;
use std::time::Instant;

use rayon::prelude::*;

use crate::board::{Move, Position, Variant};
use crate::error::NimError;
use crate::eval::{Score, SCORE_INF};
use crate::movegen::{apply_generated, root_moves};

use super::alphabeta::alpha_beta;

/// Default search depth.
pub const DEFAULT_DEPTH: u32 = 3;

/// Search limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Depth budget handed to the recursive search.
    pub depth: u32,
    /// When true the root ply is not charged against `depth`, so the
    /// engine looks one ply further than `depth` suggests. When false the
    /// root's children are searched at `depth - 1`.
    pub free_root_ply: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            free_root_ply: true,
        }
    }
}

impl SearchConfig {
    /// Config with the given depth and the free root ply.
    pub fn with_depth(depth: u32) -> Self {
        SearchConfig {
            depth,
            ..Self::default()
        }
    }

    /// Depth budget for the root's children.
    fn child_depth(&self) -> u32 {
        if self.free_root_ply {
            self.depth
        } else {
            self.depth.saturating_sub(1)
        }
    }
}

/// Result of a search: the chosen move and its score.
///
/// The score only ranks moves; once the depth bound cuts the tree it is
/// not the game-theoretic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    pub score: Score,
    pub nodes: u64,
}

/// Score of one root move.
struct RootLine {
    mv: Move,
    score: Score,
    nodes: u64,
}

/// Returns true if `score` should replace `best` under `variant`.
fn improves(score: Score, best: Score, variant: Variant) -> bool {
    match variant {
        Variant::Standard => score > best,
        Variant::Misere => score < best,
    }
}

/// Starting value for the running best.
fn worst_score(variant: Variant) -> Score {
    match variant {
        Variant::Standard => -SCORE_INF,
        Variant::Misere => SCORE_INF,
    }
}

fn score_root_move(position: &Position, mv: Move, variant: Variant, depth: u32) -> RootLine {
    let child = apply_generated(position, mv);
    let mut nodes = 0;
    let score = alpha_beta(&child, depth, false, -SCORE_INF, SCORE_INF, variant, &mut nodes);
    RootLine { mv, score, nodes }
}

/// Folds root lines in root order into the selected move.
fn select(lines: &[RootLine], variant: Variant) -> Option<SearchResult> {
    let mut best: Option<(Move, Score)> = None;
    let mut best_score = worst_score(variant);
    let mut nodes = 0;

    for line in lines {
        nodes += line.nodes;
        if improves(line.score, best_score, variant) {
            best_score = line.score;
            best = Some((line.mv, line.score));
        }
    }

    best.map(|(best_move, score)| SearchResult {
        best_move,
        score,
        nodes,
    })
}

fn terminal_error(position: &Position) -> NimError {
    NimError::TerminalPosition {
        red: position.red(),
        blue: position.blue(),
    }
}

/// Picks the computer's move from `position`.
///
/// Fails if the position is already finished.
pub fn search(
    position: &Position,
    variant: Variant,
    config: &SearchConfig,
) -> Result<SearchResult, NimError> {
    search_with_info(position, variant, config, &mut std::io::sink())
}

/// Like [`search`], writing `info` lines to `out`: one per root move and a
/// summary line at the end.
pub fn search_with_info<W: Write>(
    position: &Position,
    variant: Variant,
    config: &SearchConfig,
    out: &mut W,
) -> Result<SearchResult, NimError> {
    if position.is_terminal() {
        return Err(terminal_error(position));
    }
    let start = Instant::now();
    let depth = config.child_depth();

    let mut lines = Vec::with_capacity(4);
    for mv in root_moves(position) {
        let line = score_root_move(position, mv, variant, depth);
        writeln!(
            out,
            "info move {} score {} nodes {}",
            line.mv, line.score, line.nodes
        )?;
        lines.push(line);
    }

    let result = select(&lines, variant).ok_or_else(|| terminal_error(position))?;
    writeln!(
        out,
        "info depth {} nodes {} score {} time {}",
        config.depth,
        result.nodes,
        result.score,
        start.elapsed().as_millis()
    )?;
    Ok(result)
}

/// Like [`search`], scoring the root moves concurrently with rayon.
///
/// Root children are independent (each starts from the full window), so
/// this picks the same move and score as [`search`].
pub fn search_parallel(
    position: &Position,
    variant: Variant,
    config: &SearchConfig,
) -> Result<SearchResult, NimError> {
    if position.is_terminal() {
        return Err(terminal_error(position));
    }
    let depth = config.child_depth();

    let lines: Vec<RootLine> = root_moves(position)
        .into_par_iter()
        .map(|mv| score_root_move(position, mv, variant, depth))
        .collect();

    select(&lines, variant).ok_or_else(|| terminal_error(position))
}
