//! Board coordinates for tic-tac-toe moves.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// A move: the `(row, col)` of the square to mark.
///
/// Any pair is representable so that out-of-range input can be rejected by
/// [`apply_move`](crate::apply_move) rather than by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// Row, top to bottom.
    pub row: usize,
    /// Column, left to right.
    pub col: usize,
}

impl Move {
    /// All nine on-board moves in row-major order.
    pub const ALL: [Move; 9] = [
        Move::new(0, 0),
        Move::new(0, 1),
        Move::new(0, 2),
        Move::new(1, 0),
        Move::new(1, 1),
        Move::new(1, 2),
        Move::new(2, 0),
        Move::new(2, 1),
        Move::new(2, 2),
    ];

    /// Creates a new move.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether both coordinates fall inside the 3x3 grid.
    pub fn in_bounds(self) -> bool {
        self.row < 3 && self.col < 3
    }

    /// Creates a move from a row-major board index (0-8).
    #[instrument(level = "trace")]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Converts to a row-major board index (0-8), if on the board.
    #[instrument(level = "trace")]
    pub fn to_index(self) -> Option<usize> {
        self.in_bounds().then_some(self.row * 3 + self.col)
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Move {
    type Err = ParseError;

    /// Parses `"row col"`, `"row,col"` (0-based) or a keypad number `1`-`9`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        let parse = |part: &str| {
            part.parse::<usize>()
                .map_err(|e| ParseError::new(format!("invalid coordinate {:?}: {}", part, e)))
        };

        match parts.as_slice() {
            &[row, col] => Ok(Move::new(parse(row)?, parse(col)?)),
            &[key] => {
                let key = parse(key)?;
                key.checked_sub(1)
                    .and_then(Move::from_index)
                    .ok_or_else(|| ParseError::new(format!("square number {} is not 1-9", key)))
            }
            _ => Err(ParseError::new(format!(
                "expected \"row col\" or a square number, got {:?}",
                s.trim()
            ))),
        }
    }
}
