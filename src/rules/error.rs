//! The rules' only failure: applying an action that is not legal.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::core::Action;

/// Why an action was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum RejectReason {
    /// Row or column outside `0..3`.
    #[display("cell is out of bounds")]
    OutOfBounds,

    /// The cell already holds a mark.
    #[display("cell is already occupied")]
    Occupied,

    /// The board is terminal; no move is legal.
    #[display("game is already over")]
    GameOver,
}

/// Returned by [`result`](super::result) when the action is not in
/// [`actions`](super::actions) for the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display("invalid action {action}: {reason}")]
pub struct InvalidActionError {
    /// The rejected action.
    pub action: Action,

    /// What made it illegal.
    pub reason: RejectReason,
}

impl InvalidActionError {
    #[must_use]
    pub const fn new(action: Action, reason: RejectReason) -> Self {
        Self { action, reason }
    }
}
