//! Tests for the minimax search.

use strictly_minimax::{
    Board, GameStatus, Move, Player, apply_move, current_player, initial_state, is_terminal,
    legal_moves, optimal_move, search, undo_move, winner,
};

#[test]
fn test_blocks_open_row() {
    let mut board: Board = "XX./.O./...".parse().unwrap();
    assert_eq!(current_player(&board), Player::O);
    assert_eq!(optimal_move(&mut board), Some(Move::new(0, 2)));
}

#[test]
fn test_takes_immediate_win_for_x() {
    let mut board: Board = "XX./OO./...".parse().unwrap();
    let result = search(&mut board);
    assert_eq!(result.best, Some(Move::new(0, 2)));
    assert_eq!(result.score, 1);
    assert_eq!(result.predicted(), GameStatus::Won(Player::X));
}

#[test]
fn test_takes_immediate_win_for_o() {
    let mut board: Board = ".X./XO./X.O".parse().unwrap();
    let result = search(&mut board);
    assert_eq!(result.best, Some(Move::new(0, 0)));
    assert_eq!(result.score, -1);
}

#[test]
fn test_no_move_on_terminal_board() {
    let mut won: Board = "XXX/OO./...".parse().unwrap();
    assert_eq!(optimal_move(&mut won), None);

    let mut drawn: Board = "XOX/OXX/OXO".parse().unwrap();
    assert_eq!(optimal_move(&mut drawn), None);
    assert_eq!(search(&mut drawn).score, 0);
}

#[test]
fn test_search_leaves_board_unchanged() {
    let mut board: Board = "X../.O./..X".parse().unwrap();
    let before = board.clone();
    let _ = optimal_move(&mut board);
    assert_eq!(board, before);
}

#[test]
fn test_empty_board_is_a_draw_and_opens_top_left() {
    let mut board = initial_state();
    let result = search(&mut board);
    assert_eq!(result.score, 0);
    assert_eq!(result.predicted(), GameStatus::Draw);
    // Every opening draws, so the first square in row-major order is kept.
    assert_eq!(result.best, Some(Move::new(0, 0)));
    assert_eq!(board, initial_state());
}

#[test]
fn test_self_play_draws() {
    let mut board = initial_state();
    while let Some(mv) = optimal_move(&mut board) {
        apply_move(&mut board, mv).unwrap();
    }
    assert!(is_terminal(&board));
    assert_eq!(winner(&board), None);
}

#[test]
fn test_search_is_deterministic() {
    let mut board: Board = ".../.X./...".parse().unwrap();
    let first = optimal_move(&mut board);
    let second = optimal_move(&mut board);
    assert_eq!(first, second);
}

/// Tries every X reply against the engine playing O and checks X never wins.
fn engine_as_o_never_loses(board: &mut Board) {
    if is_terminal(board) {
        assert_ne!(winner(board), Some(Player::X), "engine lost on\n{}", board);
        return;
    }

    match current_player(board) {
        Player::X => {
            for mv in legal_moves(board) {
                apply_move(board, mv).unwrap();
                engine_as_o_never_loses(board);
                undo_move(board, mv);
            }
        }
        Player::O => {
            let mv = optimal_move(board).unwrap();
            apply_move(board, mv).unwrap();
            engine_as_o_never_loses(board);
            undo_move(board, mv);
        }
    }
}

#[test]
fn test_engine_never_loses_as_o() {
    let mut board = initial_state();
    engine_as_o_never_loses(&mut board);
    assert_eq!(board, initial_state());
}
