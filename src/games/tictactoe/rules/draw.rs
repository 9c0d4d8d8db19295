//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().all(|s| s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::winner;
    use super::*;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board: Board = ".../.X./...".parse().unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // Full board, X completes the left column
        let board: Board = "XOO/XXO/XOX".parse().unwrap();
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
