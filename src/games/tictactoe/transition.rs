//! Turn order and board mutation.

use super::{Board, Move, Player, Square};
use crate::error::{InvalidMoveError, InvalidMoveKind};
use tracing::{instrument, trace};

/// Returns the starting (empty) board.
#[instrument(level = "trace")]
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player who moves next.
///
/// X moves whenever both sides have the same number of marks.
#[instrument(level = "trace", skip(board))]
pub fn current_player(board: &Board) -> Player {
    if board.count(Player::X) == board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}

/// Returns every empty square, each once, in row-major order.
#[instrument(level = "trace", skip(board))]
pub fn legal_moves(board: &Board) -> Vec<Move> {
    Move::ALL
        .iter()
        .copied()
        .filter(|&mv| board.is_empty(mv))
        .collect()
}

/// Marks `mv` for the player whose turn it is.
///
/// The mover is derived from the board; the caller never chooses the mark.
#[track_caller]
#[instrument(level = "trace", skip(board))]
pub fn apply_move(board: &mut Board, mv: Move) -> Result<&mut Board, InvalidMoveError> {
    match board.get(mv) {
        None => Err(InvalidMoveError::new(mv, InvalidMoveKind::OutOfRange)),
        Some(Square::Occupied(owner)) => {
            Err(InvalidMoveError::new(mv, InvalidMoveKind::Occupied(owner)))
        }
        Some(Square::Empty) => {
            let player = current_player(board);
            board.set(mv, Square::Occupied(player));
            trace!(%mv, %player, "Applied move");
            Ok(board)
        }
    }
}

/// Clears the square at `mv`.
///
/// Unconditional: callers pair it with the `apply_move` that filled the square.
/// Off-board moves are ignored.
#[instrument(level = "trace", skip(board))]
pub fn undo_move(board: &mut Board, mv: Move) -> &mut Board {
    board.set(mv, Square::Empty);
    board
}
