//! Console protocol handling.
//!
//! Parsing and formatting of the text the game loop exchanges with a
//! human player.

pub mod notation;

pub use notation::{parse_amount, parse_pile, read_human_move, ParseError};
