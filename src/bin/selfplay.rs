//! Self-play game generation CLI.
//!
//! Plays Red-Blue Nim games with the engine in the first seat and prints
//! per-game progress and a win/score summary to stderr.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS]

use std::time::Instant;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use red_blue_nim::board::Variant;
use red_blue_nim::search::DEFAULT_DEPTH;
use red_blue_nim::selfplay::{self, Opponent, SelfPlayConfig};

#[derive(Clone, Copy, ValueEnum)]
enum VariantArg {
    Standard,
    Misere,
}

#[derive(Clone, Copy, ValueEnum)]
enum OpponentArg {
    Engine,
    Random,
}

#[derive(Parser)]
#[command(name = "selfplay")]
#[command(version, about = "Play Red-Blue Nim self-play games and summarize the results", long_about = None)]
struct Args {
    /// Number of games to play
    #[arg(long, default_value_t = 10)]
    games: usize,

    /// Starting red pile
    #[arg(long, default_value_t = 10)]
    red: u32,

    /// Starting blue pile
    #[arg(long, default_value_t = 10)]
    blue: u32,

    /// Scoring variant
    #[arg(long, value_enum, default_value = "standard")]
    variant: VariantArg,

    /// Engine search depth
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u32,

    /// Second-seat player
    #[arg(long, value_enum, default_value = "random")]
    opponent: OpponentArg,

    /// Number of parallel threads
    #[arg(long, default_value_t = 4)]
    threads: usize,

    /// Random seed, 0 for entropy
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Suppress progress and summary output
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = SelfPlayConfig {
        num_games: args.games,
        red: args.red,
        blue: args.blue,
        variant: match args.variant {
            VariantArg::Standard => Variant::Standard,
            VariantArg::Misere => Variant::Misere,
        },
        depth: args.depth,
        opponent: match args.opponent {
            OpponentArg::Engine => Opponent::Engine,
            OpponentArg::Random => Opponent::Random,
        },
        threads: args.threads,
        seed: args.seed,
        quiet: args.quiet,
    };

    if !config.quiet {
        eprintln!(
            "Self-play: {} games from ({}, {}) {}, depth {}, vs {:?}, {} threads",
            config.num_games,
            config.red,
            config.blue,
            config.variant.name(),
            config.depth,
            config.opponent,
            config.threads
        );
    }

    let start = Instant::now();
    let games = selfplay::run_self_play(&config)?;
    if !config.quiet {
        eprintln!(
            "Completed {} games in {:.2}s",
            games.len(),
            start.elapsed().as_secs_f64()
        );
        selfplay::print_summary(&games);
    }
    Ok(())
}
