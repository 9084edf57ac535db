//! Minimax integration tests: optimality, determinism, full-tree facts.

use tictactoe_minimax::core::{Action, Board, Cell, Player};
use tictactoe_minimax::play::{play_game, MinimaxPolicy, RandomPolicy};
use tictactoe_minimax::rules::{actions, initial_state, player, result, terminal, utility};
use tictactoe_minimax::search::{
    max_value, min_value, minimax, reachable_boards, Minimax, SearchConfig,
};

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

// =============================================================================
// Solved-Game Results
// =============================================================================

#[test]
fn test_self_play_from_empty_board_draws() {
    let mut board = initial_state();
    let mut plies = 0;

    while !terminal(&board) {
        let action = minimax(&board).expect("live board has a move");
        board = result(&board, action).unwrap();
        plies += 1;
    }

    assert_eq!(plies, 9);
    assert_eq!(utility(&board), 0);
}

#[test]
fn test_game_value_is_draw_for_both_formulations() {
    assert_eq!(max_value(&initial_state()), 0);

    // After any opening by X, O to move still holds the draw.
    for action in actions(&initial_state()) {
        let child = result(&initial_state(), action).unwrap();
        assert_eq!(min_value(&child), 0, "opening {action}");
    }
}

#[test]
fn test_minimax_returns_none_on_every_terminal_board() {
    let finished: Vec<Board> = reachable_boards().into_iter().filter(terminal).collect();
    assert_eq!(finished.len(), 958);

    for b in finished {
        assert_eq!(minimax(&b), None, "\n{b}");
    }
}

#[test]
fn test_reachable_boards_keep_mark_counts() {
    for b in reachable_boards() {
        let x = b.count(Cell::X);
        let o = b.count(Cell::O);
        assert!(x >= o && x - o <= 1, "\n{b}");
    }
}

#[test]
#[should_panic(expected = "malformed board")]
fn test_minimax_rejects_impossible_mark_counts() {
    let _ = minimax(&board("OO......."));
}

// =============================================================================
// Tactics
// =============================================================================

#[test]
fn test_x_takes_immediate_win() {
    let position = board("XX./OO./...");
    assert_eq!(minimax(&position), Some(Action::new(0, 2)));
}

#[test]
fn test_chosen_move_preserves_board_value() {
    for s in ["X........", "X...O....", "XO..X....", "OO./XX./...", "X.O/.X./..O"] {
        let b = board(s);
        let action = minimax(&b).unwrap();
        let child = result(&b, action).unwrap();

        match player(&b) {
            Player::X => assert_eq!(min_value(&child), max_value(&b), "\n{b}"),
            Player::O => assert_eq!(max_value(&child), min_value(&b), "\n{b}"),
        }
    }
}

#[test]
fn test_o_answers_corner_opening_with_centre() {
    // Against a corner opening, the centre is O's only drawing reply.
    let b = board("X........");
    assert_eq!(minimax(&b), Some(Action::new(1, 1)));

    let mut search = Minimax::default();
    let scored = search.evaluate(&b);
    let drawing: Vec<Action> = scored.iter().filter(|s| s.value == 0).map(|s| s.action).collect();
    assert_eq!(drawing, vec![Action::new(1, 1)]);
}

#[test]
fn test_o_to_move_minimizes() {
    let b = board("X........");
    assert_eq!(player(&b), Player::O);

    let mut search = Minimax::default();
    let best = search.value(&b);
    let scored = search.evaluate(&b);
    assert_eq!(best, scored.iter().map(|s| s.value).min().unwrap());
}

// =============================================================================
// Against a Random Opponent
// =============================================================================

#[test]
fn test_minimax_as_o_never_loses_to_random() {
    let mut perfect = MinimaxPolicy::default();
    let mut random = RandomPolicy::new(2024);

    for _ in 0..10 {
        let mut opponent = random.fork();
        let record = play_game(&mut opponent, &mut perfect).unwrap();
        assert!(record.utility() <= 0, "lost as O: {:?}", record.moves);
    }
}

#[test]
fn test_minimax_as_x_never_loses_to_random() {
    let mut perfect = MinimaxPolicy::default();
    let mut random = RandomPolicy::new(7);

    for _ in 0..3 {
        let mut opponent = random.fork();
        let record = play_game(&mut perfect, &mut opponent).unwrap();
        assert!(record.utility() >= 0, "lost as X: {:?}", record.moves);
    }
}

// =============================================================================
// Determinism & Configuration
// =============================================================================

#[test]
fn test_minimax_is_deterministic() {
    let b = board("X...O....");
    let first = minimax(&b);
    for _ in 0..3 {
        assert_eq!(minimax(&b), first);
    }
}

#[test]
fn test_parallel_config_matches_sequential() {
    let mut sequential = Minimax::new(SearchConfig::default());
    let mut parallel = Minimax::new(SearchConfig::default().with_parallel(true));

    for s in ["X........", "X...O....", "XO..X....", "XX./OO./..."] {
        let b = board(s);
        assert_eq!(sequential.evaluate(&b), parallel.evaluate(&b), "\n{b}");
        assert_eq!(sequential.stats().leaves, parallel.stats().leaves);
    }
}
