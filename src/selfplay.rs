//! Self-play game generation.
//!
//! Plays complete games with the engine in the first seat and either the
//! engine or a random mover in the second. Records stay in memory; only a
//! win and score summary is printed.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::board::{Move, Side, Variant};
use crate::engine::{Game, GameConfig};
use crate::error::NimError;
use crate::eval::Score;
use crate::movegen::random_move;
use crate::search::DEFAULT_DEPTH;

/// Who plays the second seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opponent {
    /// The engine, with the same depth.
    Engine,
    /// A uniformly random legal move each turn.
    Random,
}

/// Configuration for self-play game generation.
#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Starting red pile.
    pub red: u32,
    /// Starting blue pile.
    pub blue: u32,
    pub variant: Variant,
    /// Search depth for engine moves.
    pub depth: u32,
    pub opponent: Opponent,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 10,
            red: 10,
            blue: 10,
            variant: Variant::Standard,
            depth: DEFAULT_DEPTH,
            opponent: Opponent::Random,
            threads: 4,
            seed: 0,
            quiet: false,
        }
    }
}

/// A finished self-play game.
///
/// The first seat plays as [`Side::Computer`], the second as [`Side::Human`].
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub game_id: usize,
    pub red: u32,
    pub blue: u32,
    pub variant: Variant,
    pub opponent: Opponent,
    /// Moves in play order, first seat first.
    pub moves: Vec<Move>,
    pub winner: Side,
    pub score: Score,
}

/// Plays one game to completion.
pub fn play_game(
    config: &SelfPlayConfig,
    game_id: usize,
    rng: &mut impl Rng,
) -> Result<GameRecord, NimError> {
    let mut game = Game::new(&GameConfig {
        red: config.red,
        blue: config.blue,
        variant: config.variant,
        first: Side::Computer,
        depth: config.depth,
        show_search: false,
    });

    while !game.is_over() {
        let mv = match (game.to_move(), config.opponent) {
            (Side::Human, Opponent::Random) => {
                let pos = game.position();
                random_move(&pos, rng).ok_or(NimError::TerminalPosition {
                    red: pos.red(),
                    blue: pos.blue(),
                })?
            }
            _ => game.computer_move()?.best_move,
        };
        game.play(mv)?;
    }

    let pos = game.position();
    let outcome = game.outcome().ok_or(NimError::TerminalPosition {
        red: pos.red(),
        blue: pos.blue(),
    })?;
    Ok(GameRecord {
        game_id,
        red: config.red,
        blue: config.blue,
        variant: config.variant,
        opponent: config.opponent,
        moves: outcome.moves.iter().map(|(_, mv)| *mv).collect(),
        winner: outcome.winner,
        score: outcome.score,
    })
}

fn game_rng(seed: u64, game_id: usize) -> SmallRng {
    if seed != 0 {
        SmallRng::seed_from_u64(seed.wrapping_add(game_id as u64))
    } else {
        SmallRng::from_entropy()
    }
}

fn report(config: &SelfPlayConfig, n: usize, game: &GameRecord, start: Instant) {
    if config.quiet {
        return;
    }
    eprintln!(
        "Game {}/{}: {} wins by {} after {} moves ({:.3}s)",
        n,
        config.num_games,
        game.winner.name(),
        game.score,
        game.moves.len(),
        start.elapsed().as_secs_f64(),
    );
}

/// Runs self-play generation, producing `config.num_games` records in
/// game-id order.
///
/// When `config.threads > 1`, games are played concurrently using rayon.
pub fn run_self_play(config: &SelfPlayConfig) -> Result<Vec<GameRecord>, NimError> {
    if config.threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build()?;
        let completed = AtomicUsize::new(0);
        pool.install(|| {
            (0..config.num_games)
                .into_par_iter()
                .map(|i| -> Result<GameRecord, NimError> {
                    let start = Instant::now();
                    let game = play_game(config, i, &mut game_rng(config.seed, i))?;
                    let n = completed.fetch_add(1, Ordering::Relaxed) + 1;
                    report(config, n, &game, start);
                    Ok(game)
                })
                .collect()
        })
    } else {
        let mut games = Vec::with_capacity(config.num_games);
        for i in 0..config.num_games {
            let start = Instant::now();
            let game = play_game(config, i, &mut game_rng(config.seed, i))?;
            report(config, i + 1, &game, start);
            games.push(game);
        }
        Ok(games)
    }
}

/// Prints win counts and average margin to stderr.
pub fn print_summary(games: &[GameRecord]) {
    if games.is_empty() {
        return;
    }
    let first_wins = games.iter().filter(|g| g.winner == Side::Computer).count();
    let total_score: Score = games.iter().map(|g| g.score).sum();
    eprintln!(
        "First seat won {}/{} ({:.1}%), average score {:.2}",
        first_wins,
        games.len(),
        100.0 * first_wins as f64 / games.len() as f64,
        total_score as f64 / games.len() as f64
    );
}
