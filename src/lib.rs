//! Strictly Minimax - perfect-play tic-tac-toe
//!
//! A small game engine: board state and queries, move application with
//! undo, and an exhaustive minimax search that picks the optimal move for
//! the side to move.
//!
//! # Architecture
//!
//! - **Games**: board model, rules and search (`tictactoe`)
//! - **Play**: contestants (human, engine) and the match loop
//! - **Config**: TOML settings for interactive play
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Board, Move, optimal_move};
//!
//! // X threatens the top row, O to move must block.
//! let mut board: Board = "XX./.O./...".parse()?;
//! assert_eq!(optimal_move(&mut board), Some(Move::new(0, 2)));
//! # Ok::<(), strictly_minimax::ParseError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod error;
mod games;
mod play;

// Crate-level exports - Errors
pub use error::{InvalidMoveError, InvalidMoveKind, ParseError};

// Crate-level exports - Configuration
pub use config::{ConfigError, PlayConfig};

// Crate-level exports - Match loop
pub use play::{Contestant, Engine, Human, MatchReport, play_match};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, GameStatus, Move, Player, Score, SearchResult, Square, apply_move, current_player,
    initial_state, is_full, is_terminal, legal_moves, optimal_move, search, status, undo_move,
    utility, winner,
};
