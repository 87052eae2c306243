//! Red-Blue Nim -- play against the engine on the console.
//!
//! Usage: `red_blue_nim <num-red> <num-blue> [standard|misere] [computer|human] [depth]`

use std::io::{self, BufWriter};

use anyhow::Result;
use clap::{Parser, ValueEnum};

use red_blue_nim::board::{Side, Variant};
use red_blue_nim::engine::{Game, GameConfig};
use red_blue_nim::search::DEFAULT_DEPTH;

#[derive(Clone, Copy, ValueEnum)]
enum VersionArg {
    Standard,
    Misere,
}

#[derive(Clone, Copy, ValueEnum)]
enum PlayerArg {
    Computer,
    Human,
}

#[derive(Parser)]
#[command(name = "red_blue_nim")]
#[command(version, about = "Play Red-Blue Nim against an alpha-beta engine", long_about = None)]
struct Cli {
    /// Marbles in the red pile
    num_red: u32,

    /// Marbles in the blue pile
    num_blue: u32,

    /// Scoring variant
    #[arg(value_enum, value_name = "VERSION", default_value = "standard")]
    variant: VersionArg,

    /// Who moves first
    #[arg(value_enum, default_value = "computer")]
    first_player: PlayerArg,

    /// Search depth for the computer
    #[arg(default_value_t = DEFAULT_DEPTH)]
    depth: u32,

    /// Print search info lines to stderr
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        red: cli.num_red,
        blue: cli.num_blue,
        variant: match cli.variant {
            VersionArg::Standard => Variant::Standard,
            VersionArg::Misere => Variant::Misere,
        },
        first: match cli.first_player {
            PlayerArg::Computer => Side::Computer,
            PlayerArg::Human => Side::Human,
        },
        depth: cli.depth,
        show_search: cli.verbose,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = BufWriter::new(stdout.lock());

    let mut game = Game::new(&config);
    game.run(&mut input, &mut out)?;
    Ok(())
}
