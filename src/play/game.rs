//! Game loop and game records.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::core::{ActionRecord, Board, Player};
use crate::rules::{initial_state, result, turn, GameResult, InvalidActionError, Turn};

use super::policy::Policy;

/// Why a game could not be played to the end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum PlayError {
    /// A policy chose an illegal move.
    #[display("{_0}")]
    InvalidAction(InvalidActionError),

    /// A policy returned no move while the game was still live.
    #[display("{player} returned no move on a live board")]
    NoMove { player: Player },
}

impl From<InvalidActionError> for PlayError {
    fn from(err: InvalidActionError) -> Self {
        PlayError::InvalidAction(err)
    }
}

/// A finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Position the game started from.
    pub start: Board,

    /// Moves in the order they were played.
    pub moves: Vec<ActionRecord>,

    /// The terminal position.
    pub final_board: Board,

    /// How the game ended.
    pub result: GameResult,
}

impl GameRecord {
    /// Value of the final position from X's perspective.
    #[must_use]
    pub fn utility(&self) -> i8 {
        self.result.utility()
    }

    /// Replay the recorded moves from the start position.
    ///
    /// Fails if any recorded move is illegal in sequence.
    pub fn replay(&self) -> Result<Board, InvalidActionError> {
        self.moves
            .iter()
            .try_fold(self.start, |board, record| result(&board, record.action))
    }
}

/// Play a full game from the empty board, `x` moving first.
pub fn play_game<X, O>(x: &mut X, o: &mut O) -> Result<GameRecord, PlayError>
where
    X: Policy + ?Sized,
    O: Policy + ?Sized,
{
    play_from(initial_state(), x, o)
}

/// Play from `start` until the board is terminal.
///
/// A terminal `start` yields a record with no moves.
#[instrument(level = "debug", skip_all, fields(start = %start.encode()))]
pub fn play_from<X, O>(start: Board, x: &mut X, o: &mut O) -> Result<GameRecord, PlayError>
where
    X: Policy + ?Sized,
    O: Policy + ?Sized,
{
    let mut board = start;
    let mut moves = Vec::new();

    loop {
        let mover = match turn(&board) {
            Turn::Over(outcome) => {
                debug!(result = %outcome, plies = moves.len(), "game finished");
                return Ok(GameRecord {
                    start,
                    moves,
                    final_board: board,
                    result: outcome,
                });
            }
            Turn::ToMove(mover) => mover,
        };

        let choice = match mover {
            Player::X => x.choose(&board),
            Player::O => o.choose(&board),
        };
        let action = choice.ok_or(PlayError::NoMove { player: mover })?;

        board = result(&board, action)?;
        let ply = moves.len() as u32 + 1;
        trace!(%mover, %action, ply, "move played");
        moves.push(ActionRecord::new(mover, action, ply));
    }
}
