//! The two players and their marks.

use serde::{Deserialize, Serialize};

use super::board::Cell;

/// A player. X always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The mark this player places on the board.
    #[must_use]
    pub const fn mark(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// True when `candidate` is a strictly better value than `incumbent`
    /// for this player. X maximizes, O minimizes.
    #[must_use]
    pub const fn prefers(self, candidate: i8, incumbent: i8) -> bool {
        match self {
            Player::X => candidate > incumbent,
            Player::O => candidate < incumbent,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_mark() {
        assert_eq!(Player::X.mark(), Cell::X);
        assert_eq!(Player::O.mark(), Cell::O);
    }

    #[test]
    fn test_prefers() {
        assert!(Player::X.prefers(1, 0));
        assert!(!Player::X.prefers(0, 0));
        assert!(Player::O.prefers(-1, 0));
        assert!(!Player::O.prefers(1, -1));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Player::X), "X");
        assert_eq!(format!("{}", Player::O), "O");
    }
}
