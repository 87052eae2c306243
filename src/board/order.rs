//! Move type.
//!
//! A move removes one or two marbles from a single pile.

use std::fmt;

use super::pile::Pile;

/// The amounts a player may remove, largest first.
pub const MOVE_AMOUNTS: [u32; 2] = [2, 1];

/// Removal of `amount` marbles from `pile`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub pile: Pile,
    pub amount: u32,
}

impl Move {
    pub const fn new(pile: Pile, amount: u32) -> Self {
        Move { pile, amount }
    }
}

/// Formats as `<pile> <amount>`, e.g. `red 2`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pile.name(), self.amount)
    }
}
