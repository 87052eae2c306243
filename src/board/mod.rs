//! Board representation and game-state types.
//!
//! Contains the piles, sides, positions, scoring variants, and moves.

pub mod order;
pub mod pile;
pub mod state;

pub use order::{Move, MOVE_AMOUNTS};
pub use pile::{Pile, Side, ALL_PILES};
pub use state::{Position, Variant};
