//! Minimax over the full game tree.
//!
//! The free functions [`minimax`], [`max_value`] and [`min_value`] are the
//! plain entry points. [`Minimax`] adds configuration, per-move scores and
//! search statistics.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::{Action, Board, Player};
use crate::rules::engine::advance;
use crate::rules::{actions, player, terminal, utility};

use super::config::SearchConfig;
use super::stats::SearchStats;

/// A root move with its exact minimax value (from X's perspective).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredAction {
    pub action: Action,
    pub value: i8,
}

/// The optimal move for the player to act, or `None` on a terminal board.
///
/// Equal-valued moves are broken by row-major order.
///
/// ```
/// use tictactoe_minimax::core::Action;
/// use tictactoe_minimax::search::minimax;
///
/// // X completes the top row.
/// let board = "XX./OO./...".parse().unwrap();
/// assert_eq!(minimax(&board), Some(Action::new(0, 2)));
/// ```
#[must_use]
pub fn minimax(board: &Board) -> Option<Action> {
    Minimax::default().best_action(board)
}

/// Value of `board` when X is to move and both sides play perfectly.
#[must_use]
pub fn max_value(board: &Board) -> i8 {
    max_node(board, 0, &mut SearchStats::default())
}

/// Value of `board` when O is to move and both sides play perfectly.
#[must_use]
pub fn min_value(board: &Board) -> i8 {
    min_node(board, 0, &mut SearchStats::default())
}

fn max_node(board: &Board, depth: u8, stats: &mut SearchStats) -> i8 {
    if terminal(board) {
        stats.record_leaf();
        return utility(board);
    }

    let mut best = i8::MIN;
    for action in actions(board) {
        best = best.max(child_value(board, action, Player::O, depth + 1, stats));
    }
    best
}

fn min_node(board: &Board, depth: u8, stats: &mut SearchStats) -> i8 {
    if terminal(board) {
        stats.record_leaf();
        return utility(board);
    }

    let mut best = i8::MAX;
    for action in actions(board) {
        best = best.min(child_value(board, action, Player::X, depth + 1, stats));
    }
    best
}

/// Value of the child reached by `action`, where `next` moves in the child.
fn child_value(
    board: &Board,
    action: Action,
    next: Player,
    depth: u8,
    stats: &mut SearchStats,
) -> i8 {
    let child = advance(board, action);
    stats.record_node(depth);
    match next {
        Player::X => max_node(&child, depth, stats),
        Player::O => min_node(&child, depth, stats),
    }
}

/// First strictly-best entry for `mover`.
fn select(scored: &[ScoredAction], mover: Player) -> Option<ScoredAction> {
    scored.iter().copied().fold(None, |best, candidate| match best {
        Some(incumbent) if !mover.prefers(candidate.value, incumbent.value) => Some(incumbent),
        _ => Some(candidate),
    })
}

/// Configurable minimax searcher.
///
/// Keeps the statistics of its most recent search.
#[derive(Clone, Debug, Default)]
pub struct Minimax {
    config: SearchConfig,
    stats: SearchStats,
}

impl Minimax {
    /// Create a new searcher.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// The search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics from the most recent search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The optimal move for the player to act, or `None` on a terminal board.
    #[instrument(level = "debug", skip_all, fields(board = %board.encode()))]
    pub fn best_action(&mut self, board: &Board) -> Option<Action> {
        let scored = self.evaluate(board);
        let best = select(&scored, player(board))?;

        debug!(
            action = %best.action,
            value = best.value,
            nodes = self.stats.nodes,
            leaves = self.stats.leaves,
            time_us = self.stats.time_us,
            "selected move"
        );
        Some(best.action)
    }

    /// Every legal move with its exact value, in row-major order.
    ///
    /// Empty on a terminal board.
    pub fn evaluate(&mut self, board: &Board) -> Vec<ScoredAction> {
        let start = Instant::now();
        self.stats.reset();

        if terminal(board) {
            return Vec::new();
        }

        let mover = player(board);
        let scored = if self.config.parallel {
            self.score_parallel(board, mover)
        } else {
            let mut stats = SearchStats::default();
            let scored = score_branches(board, mover, &mut stats);
            self.stats.merge(&stats);
            scored
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;
        scored
    }

    /// Exact value of `board` for whichever player is to act.
    pub fn value(&mut self, board: &Board) -> i8 {
        if terminal(board) {
            self.stats.reset();
            return utility(board);
        }

        let mover = player(board);
        let scored = self.evaluate(board);
        select(&scored, mover)
            .map(|best| best.value)
            .unwrap_or_else(|| unreachable!("live board has legal moves"))
    }

    #[cfg(feature = "parallel")]
    fn score_parallel(&mut self, board: &Board, mover: Player) -> Vec<ScoredAction> {
        use rayon::prelude::*;

        let moves = actions(board);
        let branches: Vec<(ScoredAction, SearchStats)> = moves
            .as_slice()
            .par_iter()
            .map(|&action| {
                let mut stats = SearchStats::default();
                let value = child_value(board, action, mover.opponent(), 1, &mut stats);
                (ScoredAction { action, value }, stats)
            })
            .collect();

        branches
            .into_iter()
            .map(|(scored, stats)| {
                self.stats.merge(&stats);
                scored
            })
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn score_parallel(&mut self, board: &Board, mover: Player) -> Vec<ScoredAction> {
        debug!("parallel search requested without the `parallel` feature; searching sequentially");
        let mut stats = SearchStats::default();
        let scored = score_branches(board, mover, &mut stats);
        self.stats.merge(&stats);
        scored
    }
}

fn score_branches(board: &Board, mover: Player, stats: &mut SearchStats) -> Vec<ScoredAction> {
    actions(board)
        .into_iter()
        .map(|action| ScoredAction {
            action,
            value: child_value(board, action, mover.opponent(), 1, stats),
        })
        .collect()
}
