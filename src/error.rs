//! Error types for the tic-tac-toe engine.

use crate::games::tictactoe::{Move, Player};
use derive_more::{Display, Error};
use tracing::instrument;

/// Reason a move was rejected by [`apply_move`](crate::apply_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum InvalidMoveKind {
    /// Row or column is outside `0..3`.
    #[display("coordinates out of range")]
    OutOfRange,

    /// The target square already holds a mark.
    #[display("square already taken by {}", _0)]
    Occupied(Player),
}

/// A move that cannot be applied to the board, with caller location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid move {}: {} at {}:{}", mv, kind, file, line)]
pub struct InvalidMoveError {
    /// The rejected move.
    pub mv: Move,
    /// Why it was rejected.
    pub kind: InvalidMoveKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InvalidMoveError {
    /// Creates a new invalid move error.
    #[track_caller]
    #[instrument(level = "debug")]
    pub fn new(mv: Move, kind: InvalidMoveKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            mv,
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Text that does not describe a board or a move.
#[derive(Debug, Clone, Display, Error)]
#[display("Parse error: {} at {}:{}", message, file, line)]
pub struct ParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ParseError {
    /// Creates a new parse error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
