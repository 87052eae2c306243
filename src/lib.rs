//! Red-Blue Nim engine library.
//!
//! Exposes the position and move model, terminal scoring, the alpha-beta
//! search, the console game loop, and self-play for use by integration
//! tests and the binary entry points.

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod movegen;
pub mod protocol;
pub mod search;
pub mod selfplay;

pub use error::NimError;
