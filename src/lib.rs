//! # tictactoe-minimax
//!
//! Exact optimal play for tic-tac-toe by exhaustive minimax search.
//!
//! ## Design Principles
//!
//! 1. **Value Semantics**: `Board` is a 9-byte `Copy` value. Every move
//!    produces a new board; search branches never share mutable state.
//!
//! 2. **Pure Rules**: Turn order, move generation, win detection and
//!    utility are free functions of a board.
//!
//! 3. **Exact Search**: No pruning, caching or heuristics. The full tree
//!    is small enough to search outright.
//!
//! ## Modules
//!
//! - `core`: Cells, players, boards, actions, RNG
//! - `rules`: `player`, `actions`, `result`, `winner`, `terminal`, `utility`
//! - `search`: `minimax`, `max_value`, `min_value`, the `Minimax` searcher
//! - `play`: Policies and a game loop for full games
//!
//! ## Example
//!
//! ```
//! use tictactoe_minimax::{initial_state, minimax, result, terminal, utility};
//!
//! let mut board = initial_state();
//! while !terminal(&board) {
//!     let action = minimax(&board).unwrap();
//!     board = result(&board, action).unwrap();
//! }
//! // Perfect play from both sides is a draw.
//! assert_eq!(utility(&board), 0);
//! ```

pub mod core;
pub mod play;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionList, ActionRecord, Board, Cell, GameRng, ParseBoardError, Player,
};

pub use crate::rules::{
    actions, initial_state, outcome, player, result, terminal, turn, utility, winner, GameResult,
    InvalidActionError, RejectReason, Turn,
};

pub use crate::search::{
    max_value, min_value, minimax, reachable_boards, Minimax, ScoredAction, SearchConfig,
    SearchStats,
};

pub use crate::play::{
    play_from, play_game, GameRecord, MinimaxPolicy, PlayError, Policy, RandomPolicy,
};
