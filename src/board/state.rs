//! Game position and scoring variant.
//!
//! A `Position` is a plain value holding the two pile counts. Positions are
//! never mutated in place; applying a move produces a new one.

use super::pile::Pile;

/// The scoring rule, fixed for the whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// The last player to move wins.
    Standard,
    /// The last player to move loses.
    Misere,
}

impl Variant {
    /// Returns the command-line name.
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Standard => "standard",
            Variant::Misere => "misere",
        }
    }
}

/// A snapshot of both piles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    red: u32,
    blue: u32,
}

impl Position {
    /// Creates a position with the given pile counts.
    pub const fn new(red: u32, blue: u32) -> Self {
        Position { red, blue }
    }

    /// Marbles left in the red pile.
    pub const fn red(&self) -> u32 {
        self.red
    }

    /// Marbles left in the blue pile.
    pub const fn blue(&self) -> u32 {
        self.blue
    }

    /// Marbles left in the given pile.
    pub const fn count(&self, pile: Pile) -> u32 {
        match pile {
            Pile::Red => self.red,
            Pile::Blue => self.blue,
        }
    }

    /// Returns true once either pile is empty.
    ///
    /// The game stops the moment one pile runs out, even with marbles left
    /// in the other.
    pub const fn is_terminal(&self) -> bool {
        self.red == 0 || self.blue == 0
    }

    /// Returns a copy with `count` marbles in `pile`.
    pub(crate) const fn with_count(self, pile: Pile, count: u32) -> Self {
        match pile {
            Pile::Red => Position { red: count, ..self },
            Pile::Blue => Position { blue: count, ..self },
        }
    }
}
