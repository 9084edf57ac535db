//! Property tests over positions reached by random legal play.

use proptest::prelude::*;

use tictactoe_minimax::core::{Board, Cell, Player};
use tictactoe_minimax::rules::{
    actions, initial_state, player, result, terminal, turn, winner, Turn,
};
use tictactoe_minimax::search::{max_value, min_value, minimax, Minimax};

/// Play `choices` as indices into the legal move list, stopping early at a
/// terminal board.
fn play_out(choices: &[usize]) -> Board {
    let mut board = initial_state();
    for &choice in choices {
        let moves = actions(&board);
        if moves.is_empty() {
            break;
        }
        board = result(&board, moves[choice % moves.len()]).unwrap();
    }
    board
}

fn choices(max_len: usize) -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..9, 0..=max_len)
}

proptest! {
    #[test]
    fn prop_mark_counts_stay_balanced(moves in choices(9)) {
        let board = play_out(&moves);
        let x = board.count(Cell::X);
        let o = board.count(Cell::O);
        prop_assert!(x == o || x == o + 1);
    }

    #[test]
    fn prop_result_leaves_input_unchanged(moves in choices(8)) {
        let board = play_out(&moves);
        let snapshot = board;
        for action in actions(&board) {
            let next = result(&board, action).unwrap();
            prop_assert_eq!(next.count(Cell::Empty) + 1, board.count(Cell::Empty));
            prop_assert_eq!(next.at(action), Some(player(&board).mark()));
        }
        prop_assert_eq!(board, snapshot);
    }

    #[test]
    fn prop_actions_are_exactly_empty_cells_of_live_boards(moves in choices(9)) {
        let board = play_out(&moves);
        let legal = actions(&board);
        if terminal(&board) {
            prop_assert!(legal.is_empty());
        } else {
            prop_assert_eq!(legal.len(), board.count(Cell::Empty));
            prop_assert!(legal.iter().all(|&a| board.at(a) == Some(Cell::Empty)));
            prop_assert!(legal.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn prop_turn_agrees_with_terminal(moves in choices(9)) {
        let board = play_out(&moves);
        match turn(&board) {
            Turn::Over(_) => prop_assert!(terminal(&board)),
            Turn::ToMove(p) => {
                prop_assert!(!terminal(&board));
                prop_assert_eq!(p, player(&board));
            }
        }
    }

    #[test]
    fn prop_only_last_mover_can_have_won(moves in choices(9)) {
        let board = play_out(&moves);
        if let Some(w) = winner(&board) {
            let x = board.count(Cell::X);
            let o = board.count(Cell::O);
            match w {
                Player::X => prop_assert_eq!(x, o + 1),
                Player::O => prop_assert_eq!(x, o),
            }
        }
    }

    #[test]
    fn prop_minimax_move_is_legal_and_optimal(
        moves in choices(7).prop_filter("at least two plies", |m| m.len() >= 2)
    ) {
        let board = play_out(&moves);
        match minimax(&board) {
            None => prop_assert!(terminal(&board)),
            Some(action) => {
                prop_assert!(actions(&board).contains(&action));
                let child = result(&board, action).unwrap();
                let mut search = Minimax::default();
                let best = search.value(&board);
                match player(&board) {
                    Player::X => prop_assert_eq!(min_value(&child), best),
                    Player::O => prop_assert_eq!(max_value(&child), best),
                }
            }
        }
    }
}
