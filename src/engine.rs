//! Game loop.
//!
//! Holds the current position, the side to move, and the search settings,
//! and alternates computer and human turns until a pile runs out. All I/O
//! goes through caller-supplied readers and writers so a whole game can be
//! driven from memory.

use std::io::{self, BufRead, Write};

use crate::board::{Move, Position, Side, Variant};
use crate::error::NimError;
use crate::eval::{evaluate_terminal, Score};
use crate::movegen::apply_move;
use crate::protocol::read_human_move;
use crate::search::{search, search_with_info, SearchConfig, SearchResult, DEFAULT_DEPTH};

/// Settings for a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub red: u32,
    pub blue: u32,
    pub variant: Variant,
    pub first: Side,
    pub depth: u32,
    /// Write search `info` lines to stderr on computer turns.
    pub show_search: bool,
}

impl GameConfig {
    /// A standard game with the computer moving first at the default depth.
    pub fn new(red: u32, blue: u32) -> Self {
        GameConfig {
            red,
            blue,
            variant: Variant::Standard,
            first: Side::Computer,
            depth: DEFAULT_DEPTH,
            show_search: false,
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub winner: Side,
    pub loser: Side,
    /// Points from the marbles left, always reported as a non-negative number.
    pub score: Score,
    pub final_position: Position,
    pub moves: Vec<(Side, Move)>,
}

/// A game in progress.
pub struct Game {
    position: Position,
    variant: Variant,
    to_move: Side,
    search: SearchConfig,
    show_search: bool,
    moves: Vec<(Side, Move)>,
}

impl Game {
    /// Starts a game from the configured piles.
    pub fn new(config: &GameConfig) -> Self {
        Game {
            position: Position::new(config.red, config.blue),
            variant: config.variant,
            to_move: config.first,
            search: SearchConfig::with_depth(config.depth),
            show_search: config.show_search,
            moves: Vec::new(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn is_over(&self) -> bool {
        self.position.is_terminal()
    }

    /// Runs the engine search for the side to move.
    pub fn computer_move(&self) -> Result<SearchResult, NimError> {
        if self.show_search {
            search_with_info(&self.position, self.variant, &self.search, &mut io::stderr())
        } else {
            search(&self.position, self.variant, &self.search)
        }
    }

    /// Plays `mv` for the side to move and passes the turn.
    pub fn play(&mut self, mv: Move) -> Result<(), NimError> {
        self.position = apply_move(&self.position, mv)?;
        self.moves.push((self.to_move, mv));
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    /// Scores a finished game.
    ///
    /// Standard: the side that made the last move wins. Misère: that side
    /// loses. Returns `None` while the game is still running.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.is_over() {
            return None;
        }
        let last_mover = self.to_move.opponent();
        let (winner, loser) = match self.variant {
            Variant::Standard => (last_mover, self.to_move),
            Variant::Misere => (self.to_move, last_mover),
        };
        Some(GameOutcome {
            winner,
            loser,
            score: evaluate_terminal(&self.position, self.variant).abs(),
            final_position: self.position,
            moves: self.moves.clone(),
        })
    }

    /// Plays the game to the end, prompting the human on `input`.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> Result<GameOutcome, NimError> {
        while !self.is_over() {
            let mv = match self.to_move {
                Side::Computer => {
                    let result = self.computer_move()?;
                    writeln!(
                        out,
                        "Computer picks {} {} marble(s)",
                        result.best_move.amount, result.best_move.pile
                    )?;
                    result.best_move
                }
                Side::Human => {
                    writeln!(
                        out,
                        "Remaining marbles - Red: {}, Blue: {}",
                        self.position.red(),
                        self.position.blue()
                    )?;
                    self.prompt_human(input, out)?
                }
            };
            self.play(mv)?;
        }

        let outcome = self.outcome().ok_or(NimError::TerminalPosition {
            red: self.position.red(),
            blue: self.position.blue(),
        })?;
        write_result(&outcome, self.variant, out)?;
        Ok(outcome)
    }

    /// Asks for a colour and an amount until they form a legal move.
    fn prompt_human<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
    ) -> Result<Move, NimError> {
        loop {
            let colour = prompt(input, out, "Your turn: Choose a color (red/blue): ")?;
            let amount = prompt(input, out, "Choose number of marbles (1/2): ")?;
            match read_human_move(&colour, &amount, &self.position) {
                Ok(mv) => return Ok(mv),
                Err(e) => writeln!(out, "Invalid input. Please try again. {}", e)?,
            }
        }
    }
}

/// Writes `text` without a newline and reads one line of reply.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<String, NimError> {
    write!(out, "{}", text)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(NimError::InputClosed);
    }
    Ok(line)
}

/// Writes the end-of-game announcement.
pub fn write_result<W: Write>(
    outcome: &GameOutcome,
    variant: Variant,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Game over!")?;
    match variant {
        Variant::Standard => {
            writeln!(out, "{} wins!", outcome.winner.title())?;
            writeln!(
                out,
                "{} loses with a score of {}",
                outcome.loser.title(),
                outcome.score
            )?;
        }
        Variant::Misere => {
            writeln!(
                out,
                "{} wins with a score of {}",
                outcome.winner.title(),
                outcome.score
            )?;
            writeln!(out, "{} loses!", outcome.loser.title())?;
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pile;

    fn run(config: GameConfig, input: &str) -> (Result<GameOutcome, NimError>, String) {
        let mut game = Game::new(&config);
        let mut reader = input.as_bytes();
        let mut out = Vec::new();
        let result = game.run(&mut reader, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn new_game_uses_config() {
        let mut config = GameConfig::new(3, 4);
        config.first = Side::Human;
        config.variant = Variant::Misere;
        let game = Game::new(&config);
        assert_eq!(game.position(), Position::new(3, 4));
        assert_eq!(game.to_move(), Side::Human);
        assert_eq!(game.variant(), Variant::Misere);
        assert!(!game.is_over());
        assert!(game.outcome().is_none());
    }

    #[test]
    fn play_passes_the_turn() {
        let mut game = Game::new(&GameConfig::new(3, 3));
        game.play(Move::new(Pile::Red, 2)).unwrap();
        assert_eq!(game.position(), Position::new(1, 3));
        assert_eq!(game.to_move(), Side::Human);
    }

    #[test]
    fn play_rejects_illegal_move_without_passing_turn() {
        let mut game = Game::new(&GameConfig::new(1, 3));
        assert!(game.play(Move::new(Pile::Red, 2)).is_err());
        assert_eq!(game.to_move(), Side::Computer);
        assert_eq!(game.position(), Position::new(1, 3));
    }

    #[test]
    fn computer_finishes_single_marble_game() {
        let (result, output) = run(GameConfig::new(1, 1), "");
        let outcome = result.unwrap();
        assert!(output.contains("Computer picks 1 blue marble(s)"));
        assert!(output.contains("Game over!"));
        assert!(output.contains("Computer wins!"));
        assert!(output.contains("Human loses with a score of 2"));
        assert_eq!(outcome.winner, Side::Computer);
        assert_eq!(outcome.score, 2);
        assert_eq!(outcome.final_position, Position::new(1, 0));
    }

    #[test]
    fn misere_last_mover_loses() {
        let mut config = GameConfig::new(1, 1);
        config.variant = Variant::Misere;
        let (result, output) = run(config, "");
        let outcome = result.unwrap();
        assert_eq!(outcome.winner, Side::Human);
        assert!(output.contains("Human wins with a score of 2"));
        assert!(output.contains("Computer loses!"));
    }

    #[test]
    fn human_move_is_validated_and_reprompted() {
        let mut config = GameConfig::new(1, 2);
        config.first = Side::Human;
        let (result, output) = run(config, "green\n1\nred\n2\nblue\n2\n");
        let outcome = result.unwrap();
        assert!(output.contains("Remaining marbles - Red: 1, Blue: 2"));
        assert_eq!(output.matches("Invalid input. Please try again.").count(), 2);
        assert!(output.contains("not enough marbles"));
        assert_eq!(outcome.moves, vec![(Side::Human, Move::new(Pile::Blue, 2))]);
        assert_eq!(outcome.winner, Side::Human);
        assert_eq!(outcome.score, 2);
    }

    #[test]
    fn closed_input_aborts() {
        let mut config = GameConfig::new(2, 2);
        config.first = Side::Human;
        let (result, _) = run(config, "red\n");
        assert!(matches!(result, Err(NimError::InputClosed)));
    }

    #[test]
    fn engine_self_play_sequence() {
        let mut game = Game::new(&GameConfig::new(5, 4));
        while !game.is_over() {
            let mv = game.computer_move().unwrap().best_move;
            game.play(mv).unwrap();
        }
        let played: Vec<Move> = game.outcome().unwrap().moves.iter().map(|(_, m)| *m).collect();
        let r1 = Move::new(Pile::Red, 1);
        let b1 = Move::new(Pile::Blue, 1);
        assert_eq!(played, vec![r1, r1, b1, b1, r1, b1, r1, b1]);
        assert_eq!(game.position(), Position::new(1, 0));
        assert_eq!(game.outcome().unwrap().score, 2);
    }
}
