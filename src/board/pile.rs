//! Piles and players.
//!
//! The two marble piles and the two sides of a game, with their text names
//! as used by the console protocol.

use std::fmt;

/// One of the two marble piles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pile {
    Red,
    Blue,
}

/// Both piles in canonical order (red before blue).
pub const ALL_PILES: [Pile; 2] = [Pile::Red, Pile::Blue];

impl Pile {
    /// Returns the lowercase colour name.
    pub const fn name(self) -> &'static str {
        match self {
            Pile::Red => "red",
            Pile::Blue => "blue",
        }
    }

    /// Parses a colour name, ignoring ASCII case.
    pub fn from_name(s: &str) -> Option<Pile> {
        match s.to_ascii_lowercase().as_str() {
            "red" => Some(Pile::Red),
            "blue" => Some(Pile::Blue),
            _ => None,
        }
    }

    /// Points scored per marble left in this pile at the end of the game.
    pub const fn marble_value(self) -> i64 {
        match self {
            Pile::Red => 2,
            Pile::Blue => 3,
        }
    }
}

impl fmt::Display for Pile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A participant in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Computer,
    Human,
}

impl Side {
    /// Returns the side that moves after this one.
    pub const fn opponent(self) -> Side {
        match self {
            Side::Computer => Side::Human,
            Side::Human => Side::Computer,
        }
    }

    /// Returns the lowercase name used on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Side::Computer => "computer",
            Side::Human => "human",
        }
    }

    /// Returns the capitalized name used in result messages.
    pub const fn title(self) -> &'static str {
        match self {
            Side::Computer => "Computer",
            Side::Human => "Human",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pile_names_roundtrip() {
        for p in ALL_PILES {
            assert_eq!(Pile::from_name(p.name()), Some(p));
        }
        assert_eq!(Pile::from_name("RED"), Some(Pile::Red));
        assert_eq!(Pile::from_name("green"), None);
    }

    #[test]
    fn marble_values() {
        assert_eq!(Pile::Red.marble_value(), 2);
        assert_eq!(Pile::Blue.marble_value(), 3);
    }

    #[test]
    fn side_opponent_alternates() {
        assert_eq!(Side::Computer.opponent(), Side::Human);
        assert_eq!(Side::Human.opponent().opponent(), Side::Human);
    }

    #[test]
    fn side_names() {
        assert_eq!(Side::Computer.name(), "computer");
        assert_eq!(Side::Human.title(), "Human");
    }
}
