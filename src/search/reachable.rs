//! Enumeration of every position reachable by legal play.

use rustc_hash::FxHashSet;

use crate::core::Board;
use crate::rules::engine::advance;
use crate::rules::{actions, initial_state};

/// All boards reachable from the empty board, including it.
///
/// Play stops at terminal boards, so positions "past" a win are excluded.
pub fn reachable_boards() -> FxHashSet<Board> {
    let mut seen = FxHashSet::default();
    let mut stack = vec![initial_state()];

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        stack.extend(actions(&board).into_iter().map(|action| advance(&board, action)));
    }

    seen
}
