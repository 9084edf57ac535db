//! Moves and move history.
//!
//! An [`Action`] is plain coordinate data. Whether it is legal depends on
//! the board it is applied to, so out-of-range actions can be built and
//! are rejected later by [`crate::rules::result`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::{CELL_COUNT, SIZE};
use super::player::Player;

/// A move: the `(row, col)` of the cell to mark.
///
/// Ordering is row-major, matching move enumeration.
///
/// ```
/// use tictactoe_minimax::core::Action;
///
/// let centre = Action::new(1, 1);
/// assert!(centre.in_bounds());
/// assert!(Action::new(0, 2) < Action::new(1, 0));
/// assert!(!Action::new(3, 0).in_bounds());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

/// Legal moves for one position. At most nine, so they stay inline.
pub type ActionList = SmallVec<[Action; CELL_COUNT]>;

impl Action {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Action for row-major cell `index`.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self {
            row: index / SIZE,
            col: index % SIZE,
        }
    }

    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// Row-major cell index, or `None` when out of bounds.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        if self.in_bounds() {
            Some(self.row * SIZE + self.col)
        } else {
            None
        }
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A move as it was played, for game records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who moved.
    pub player: Player,

    /// The move.
    pub action: Action,

    /// 1-based ply number.
    pub ply: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: Player, action: Action, ply: u32) -> Self {
        Self { player, action, ply }
    }
}
