//! The 3×3 board.
//!
//! ## Layout
//!
//! Cells are stored row-major: index `row * 3 + col`. Row-major order is
//! also the order in which moves are enumerated, which fixes the
//! search's tie-break.
//!
//! ## Text form
//!
//! Boards parse from and encode to nine cell characters (`X`, `O`, `.`).
//! Whitespace, `|` and `/` are ignored on parse, so both `"X.O......"`
//! and `"X.O/.../..."` describe the same board.
//!
//! ```
//! use tictactoe_minimax::core::{Board, Cell};
//!
//! let board: Board = "X.O/.X./..O".parse().unwrap();
//! assert_eq!(board.get(0, 2), Some(Cell::O));
//! assert_eq!(board.encode(), "X.O.X...O");
//! ```

use std::fmt;
use std::str::FromStr;

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use super::action::Action;
use super::player::Player;

/// Side length of the board.
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The player owning this mark, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    #[must_use]
    pub const fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }
}

/// Error returned when a board string cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    #[display("expected 9 cells, found {found}")]
    WrongLength { found: usize },

    #[display("invalid character {character:?} at cell {index}")]
    InvalidCharacter { character: char, index: usize },
}

/// An immutable 3×3 tic-tac-toe position.
///
/// `Board` is a 9-byte `Copy` value. Nothing in the crate mutates a board
/// that a caller can observe: moves go through [`crate::rules::result`],
/// which returns a fresh board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// The empty board.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Build a board from row-major cells.
    ///
    /// No mark-count check is made; see [`Board::is_well_formed`].
    #[must_use]
    pub const fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Build a board from three rows.
    #[must_use]
    pub const fn from_rows(rows: [[Cell; SIZE]; SIZE]) -> Self {
        let [[a, b, c], [d, e, f], [g, h, i]] = rows;
        Self::from_cells([a, b, c, d, e, f, g, h, i])
    }

    /// Cell at `(row, col)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < SIZE && col < SIZE {
            Some(self.cells[row * SIZE + col])
        } else {
            None
        }
    }

    /// Cell targeted by an action, or `None` when out of bounds.
    #[must_use]
    pub fn at(&self, action: Action) -> Option<Cell> {
        self.get(action.row, action.col)
    }

    /// All cells in row-major order.
    #[must_use]
    pub const fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Number of cells holding `cell`.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// True when the mark counts could arise from X-first alternating play:
    /// X has as many marks as O, or exactly one more.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let x = self.count(Cell::X);
        let o = self.count(Cell::O);
        x == o || x == o + 1
    }

    /// Copy of this board with cell `index` replaced.
    #[must_use]
    pub(crate) fn with_cell(self, index: usize, cell: Cell) -> Self {
        let mut cells = self.cells;
        cells[index] = cell;
        Self { cells }
    }

    /// Nine-character row-major encoding, e.g. `"X.O.X...O"`.
    #[must_use]
    pub fn encode(&self) -> String {
        self.cells.iter().map(|c| c.to_char()).collect()
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
            .collect();

        if chars.len() != CELL_COUNT {
            return Err(ParseBoardError::WrongLength { found: chars.len() });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (index, (&character, slot)) in chars.iter().zip(cells.iter_mut()).enumerate() {
            *slot = Cell::from_char(character)
                .ok_or(ParseBoardError::InvalidCharacter { character, index })?;
        }

        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(SIZE).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|c| c.to_char().to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
