//! Crate root module declarations for the flip_reach reachability solver.
//!
//! The crate answers one question about the two-colour flipping-board game:
//! can a goal configuration be reached from a start configuration by legal,
//! strictly alternating placements, and if so, by which line? The board
//! model, the negative-result memo, the search itself, and the text
//! utilities used by the binaries are exposed under stable module paths.

pub mod board_state {
    pub mod board_state;
    pub mod board_types;
    pub mod flip_rules;
    pub mod move_guard;
    pub mod undo_state;
}

pub mod search {
    pub mod progress;
    pub mod reachability;
    pub mod transposition_memo;
}

pub mod utils {
    pub mod algebraic;
    pub mod board_literal;
    pub mod random_playout;
    pub mod render_board_state;
}

pub mod errors;

pub use board_state::board_types::{BoardState, Cell, Move, Player};
pub use errors::{BoardError, SearchError};
pub use search::reachability::{reachable, ReachabilitySearch, SearchConfig, SearchOutcome};
