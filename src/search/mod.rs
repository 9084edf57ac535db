//! Exhaustive minimax search.
//!
//! ## Overview
//!
//! The search walks the full game tree below a position, scoring leaves
//! with [`utility`](crate::rules::utility). X maximizes, O minimizes.
//! There is no pruning and no caching: the tree has at most 549 946
//! nodes and recursion never goes deeper than 9 plies.
//!
//! ## Tie-breaking
//!
//! Moves are tried in row-major order and a later move only replaces the
//! incumbent when it is strictly better for the mover. Among equally good
//! moves the first in row-major order wins, so results are reproducible.
//!
//! ## Usage
//!
//! ```rust
//! use tictactoe_minimax::rules::initial_state;
//! use tictactoe_minimax::search::{minimax, Minimax, SearchConfig};
//!
//! // One-shot
//! let action = minimax(&initial_state());
//! assert!(action.is_some());
//!
//! // With statistics
//! let mut search = Minimax::new(SearchConfig::default());
//! let board = "XO.......".parse().unwrap();
//! let best = search.best_action(&board);
//! println!("{:?} after {} nodes", best, search.stats().nodes);
//! ```

pub mod config;
pub mod minimax;
pub mod reachable;
pub mod stats;

pub use config::SearchConfig;
pub use minimax::{max_value, min_value, minimax, Minimax, ScoredAction};
pub use reachable::reachable_boards;
pub use stats::SearchStats;
