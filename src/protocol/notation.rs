//! Reading a human's move.
//!
//! The console prompts ask for the colour and the amount separately. Each
//! answer is parsed on its own, then the pair is checked against the piles.

use thiserror::Error;

use crate::board::{Move, Pile, Position, MOVE_AMOUNTS};

/// Errors that can occur while reading a move.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty input")]
    Empty,

    #[error("unknown colour '{0}', expected red or blue")]
    UnknownPile(String),

    #[error("invalid amount '{0}', expected 1 or 2")]
    InvalidAmount(String),

    #[error("Invalid move, not enough marbles! ({pile} has {available})")]
    NotEnoughMarbles { pile: Pile, available: u32 },
}

/// Parses a colour name, case-insensitively and ignoring surrounding space.
pub fn parse_pile(s: &str) -> Result<Pile, ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    Pile::from_name(trimmed).ok_or_else(|| ParseError::UnknownPile(trimmed.to_string()))
}

/// Parses a removal amount; only 1 and 2 are accepted.
pub fn parse_amount(s: &str) -> Result<u32, ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    match trimmed.parse::<u32>() {
        Ok(n) if MOVE_AMOUNTS.contains(&n) => Ok(n),
        _ => Err(ParseError::InvalidAmount(trimmed.to_string())),
    }
}

/// Validates a human's colour and amount answers against `position`.
pub fn read_human_move(
    colour: &str,
    amount: &str,
    position: &Position,
) -> Result<Move, ParseError> {
    let pile = parse_pile(colour)?;
    let amount = parse_amount(amount)?;
    let available = position.count(pile);
    if amount > available {
        return Err(ParseError::NotEnoughMarbles { pile, available });
    }
    Ok(Move::new(pile, amount))
}
