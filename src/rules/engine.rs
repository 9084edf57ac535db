//! Turn order, move generation, transitions, and win detection.
//!
//! ## Implementation Notes
//!
//! - `actions`: row-major, empty on terminal boards
//! - `result`: the only fallible rule; never mutates its input
//! - `winner`: scans all 8 lines, even after a match
//! - `utility`: panics on a non-terminal board

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Action, ActionList, Board, Cell, Player};

use super::error::{InvalidActionError, RejectReason};

/// The 8 winning lines as row-major cell indices.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// A line was completed.
    Winner(Player),
    /// Full board, no line.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Value from X's perspective: +1, -1, or 0.
    #[must_use]
    pub const fn utility(self) -> i8 {
        match self {
            GameResult::Winner(Player::X) => 1,
            GameResult::Winner(Player::O) => -1,
            GameResult::Draw => 0,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(player) => write!(f, "{player} wins"),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}

/// Whose move it is, or how the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    ToMove(Player),
    Over(GameResult),
}

/// The empty starting board.
#[must_use]
pub fn initial_state() -> Board {
    Board::empty()
}

/// The player to move: X when mark counts are equal, otherwise O.
///
/// Only meaningful on non-terminal boards. Use [`turn`] when the board may
/// be finished.
///
/// # Panics
///
/// Panics if the mark counts could not arise in play.
#[must_use]
pub fn player(board: &Board) -> Player {
    assert!(board.is_well_formed(), "malformed board:\n{board}");

    if board.count(Cell::X) == board.count(Cell::O) {
        Player::X
    } else {
        Player::O
    }
}

/// [`player`] for live boards, the result for finished ones.
#[must_use]
pub fn turn(board: &Board) -> Turn {
    match outcome(board) {
        Some(result) => Turn::Over(result),
        None => Turn::ToMove(player(board)),
    }
}

/// Every empty cell, row-major. Empty when the board is terminal.
///
/// ```
/// use tictactoe_minimax::core::Action;
/// use tictactoe_minimax::rules::{actions, initial_state};
///
/// let moves = actions(&initial_state());
/// assert_eq!(moves.len(), 9);
/// assert_eq!(moves[0], Action::new(0, 0));
/// ```
#[must_use]
pub fn actions(board: &Board) -> ActionList {
    if terminal(board) {
        return ActionList::new();
    }

    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(index, _)| Action::from_index(index))
        .collect()
}

/// The board after the player to move marks `action`.
///
/// Fails unless `action` is in [`actions`]`(board)`. The input is left
/// untouched.
///
/// ```
/// use tictactoe_minimax::core::{Action, Cell, Player};
/// use tictactoe_minimax::rules::{initial_state, player, result};
///
/// let board = initial_state();
/// let next = result(&board, Action::new(1, 1)).unwrap();
///
/// assert_eq!(next.get(1, 1), Some(Cell::X));
/// assert_eq!(player(&next), Player::O);
/// assert!(result(&next, Action::new(1, 1)).is_err());
/// ```
pub fn result(board: &Board, action: Action) -> Result<Board, InvalidActionError> {
    let reject = |reason: RejectReason| {
        trace!(%action, %reason, "rejected action");
        InvalidActionError::new(action, reason)
    };

    let index = action.index().ok_or_else(|| reject(RejectReason::OutOfBounds))?;
    if !board.cells()[index].is_empty() {
        return Err(reject(RejectReason::Occupied));
    }
    if terminal(board) {
        return Err(reject(RejectReason::GameOver));
    }

    Ok(board.with_cell(index, player(board).mark()))
}

/// Apply a move known to come from [`actions`].
pub(crate) fn advance(board: &Board, action: Action) -> Board {
    let index = action.row * crate::core::SIZE + action.col;
    board.with_cell(index, player(board).mark())
}

/// The owner of a completed line, if any.
///
/// All 8 lines are checked. On a malformed board where both marks
/// complete a line, the first in scan order (rows, columns, diagonals)
/// is reported.
#[must_use]
pub fn winner(board: &Board) -> Option<Player> {
    let cells = board.cells();

    LINES
        .iter()
        .filter_map(|&[a, b, c]| {
            let owner = cells[a].player()?;
            (cells[a] == cells[b] && cells[b] == cells[c]).then_some(owner)
        })
        .fold(None, |found, owner| found.or(Some(owner)))
}

/// True when a line is complete or the board is full.
#[must_use]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// How the game ended, or `None` while it is still going.
#[must_use]
pub fn outcome(board: &Board) -> Option<GameResult> {
    match winner(board) {
        Some(player) => Some(GameResult::Winner(player)),
        None if board.is_full() => Some(GameResult::Draw),
        None => None,
    }
}

/// Value of a terminal board from X's perspective.
///
/// # Panics
///
/// Panics if the board is not terminal.
#[must_use]
pub fn utility(board: &Board) -> i8 {
    outcome(board)
        .unwrap_or_else(|| panic!("utility called on a non-terminal board:\n{board}"))
        .utility()
}
