//! Move-choosing policies.

use crate::core::{Action, Board, GameRng};
use crate::rules::actions;
use crate::search::{Minimax, SearchConfig, SearchStats};

/// Chooses a move for the player to act on `board`.
///
/// Returning `None` on a live board is treated as a forfeit by
/// [`play_game`](super::play_game).
pub trait Policy {
    fn choose(&mut self, board: &Board) -> Option<Action>;
}

/// Perfect play via [`Minimax`].
#[derive(Clone, Debug, Default)]
pub struct MinimaxPolicy {
    search: Minimax,
}

impl MinimaxPolicy {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            search: Minimax::new(config),
        }
    }

    /// Statistics from the most recent move choice.
    pub fn stats(&self) -> &SearchStats {
        self.search.stats()
    }
}

impl Policy for MinimaxPolicy {
    fn choose(&mut self, board: &Board) -> Option<Action> {
        self.search.best_action(board)
    }
}

/// Uniformly random legal moves from a seeded RNG.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// A policy with an independent stream derived from this one.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self {
            rng: self.rng.fork(),
        }
    }
}

impl Policy for RandomPolicy {
    fn choose(&mut self, board: &Board) -> Option<Action> {
        let moves = actions(board);
        self.rng.choose(&moves).copied()
    }
}
