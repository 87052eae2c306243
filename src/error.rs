//! Crate error type.

use crate::board::Pile;

/// Errors raised by the core model and the game loop.
#[derive(Debug, thiserror::Error)]
pub enum NimError {
    /// A move asked for more marbles than its pile holds, or an amount
    /// outside {1, 2}. Never produced by the search, which only applies
    /// generated moves.
    #[error("invalid move: cannot take {amount} from {pile} pile holding {available}")]
    InvalidMove {
        pile: Pile,
        amount: u32,
        available: u32,
    },

    #[error("no legal move from a terminal position ({red}, {blue})")]
    TerminalPosition { red: u32, blue: u32 },

    #[error("input closed before the human moved")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
