//! Terminal detection and scoring.

use super::super::{Board, GameStatus, Player};
use super::{is_full, winner};
use tracing::instrument;

/// Minimax value of a position: `1` X wins, `0` draw, `-1` O wins.
pub type Score = i8;

/// True once someone has a line or no empty squares remain.
#[instrument(level = "trace", skip(board))]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Value of a finished game from X's point of view.
///
/// Only meaningful on terminal boards; a board without a winner scores `0`.
#[instrument(level = "trace", skip(board))]
pub fn utility(board: &Board) -> Score {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

/// Summarises the board for callers driving a game.
#[instrument(level = "trace", skip(board))]
pub fn status(board: &Board) -> GameStatus {
    match winner(board) {
        Some(player) => GameStatus::Won(player),
        None if is_full(board) => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}
