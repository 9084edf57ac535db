//! Core data model: cells, players, boards, actions, RNG.
//!
//! Everything here is a plain value type. Boards are `Copy` and every
//! transition produces a new board, so search branches never alias.

pub mod action;
pub mod board;
pub mod player;
pub mod rng;

pub use action::{Action, ActionList, ActionRecord};
pub use board::{Board, Cell, ParseBoardError, CELL_COUNT, SIZE};
pub use player::Player;
pub use rng::GameRng;
