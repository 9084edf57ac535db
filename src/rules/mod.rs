//! Game rules as pure functions over [`Board`](crate::core::Board).
//!
//! - Whose turn it is, and whether the game is over
//! - Legal moves and how a move produces the next board
//! - Win detection and terminal utility
//!
//! Nothing here keeps state between calls. The search builds on these
//! functions and never inspects cells directly.

pub mod engine;
pub mod error;

pub use engine::{
    actions, initial_state, outcome, player, result, terminal, turn, utility, winner, GameResult,
    Turn, LINES,
};
pub use error::{InvalidActionError, RejectReason};
