//! Search and move selection.
//!
//! Fixed-depth minimax with alpha-beta pruning underneath a root that
//! scores each of the computer's moves as an opponent (minimizing) node.

pub mod alphabeta;
pub mod root;

pub use alphabeta::{full_width_minimax, minimax};
pub use root::{
    search, search_parallel, search_with_info, SearchConfig, SearchResult, DEFAULT_DEPTH,
};
