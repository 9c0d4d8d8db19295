//! Core domain types for tic-tac-toe.

use super::position::Move;
use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first, maximizing side).
    X,
    /// Player O (goes second, minimizing side).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// Squares are only changed through [`apply_move`](crate::apply_move) and
/// [`undo_move`](crate::undo_move).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Square; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from explicit rows.
    ///
    /// The mark counts are not checked against turn order.
    pub fn from_rows(cells: [[Square; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Gets the square at `mv`, or `None` when the move is off the board.
    pub fn get(&self, mv: Move) -> Option<Square> {
        self.cells.get(mv.row)?.get(mv.col).copied()
    }

    /// Checks if the square at `mv` exists and is empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        matches!(self.get(mv), Some(Square::Empty))
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Square; 3]; 3] {
        &self.cells
    }

    /// Iterates over all squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Number of squares marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares()
            .filter(|sq| *sq == Square::Occupied(player))
            .count()
    }

    /// Writes a square. Off-board moves are ignored.
    pub(crate) fn set(&mut self, mv: Move, square: Square) {
        if let Some(cell) = self
            .cells
            .get_mut(mv.row)
            .and_then(|row| row.get_mut(mv.col))
        {
            *cell = square;
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for (c, square) in row.iter().enumerate() {
                match square {
                    Square::Empty => write!(f, "{}", r * 3 + c + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player)?,
                }
                if c < 2 {
                    f.write_str("|")?;
                }
            }
            if r < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseError;

    /// Parses nine cells such as `"XO./.X./..O"`.
    ///
    /// `X`/`O` (any case) are marks, `.`, `-` and `_` are empty squares.
    /// Whitespace, `/` and `|` are separators and ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for ch in s.chars() {
            match ch {
                'x' | 'X' => squares.push(Square::Occupied(Player::X)),
                'o' | 'O' => squares.push(Square::Occupied(Player::O)),
                '.' | '-' | '_' => squares.push(Square::Empty),
                '/' | '|' => {}
                c if c.is_whitespace() => {}
                other => {
                    return Err(ParseError::new(format!(
                        "unexpected character {:?} in board",
                        other
                    )));
                }
            }
        }

        if squares.len() != 9 {
            return Err(ParseError::new(format!(
                "expected 9 squares, found {}",
                squares.len()
            )));
        }

        let mut board = Board::new();
        for (idx, square) in squares.into_iter().enumerate() {
            board.cells[idx / 3][idx % 3] = square;
        }
        Ok(board)
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("In progress")]
    InProgress,
    /// Game ended in a win.
    #[display("{} wins", _0)]
    Won(Player),
    /// Game ended in a draw.
    #[display("Draw")]
    Draw,
}
