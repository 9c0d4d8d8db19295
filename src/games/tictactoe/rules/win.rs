//! Win detection logic for tic-tac-toe.

use super::super::{Board, Move, Player, Square};
use tracing::instrument;

/// Every line that wins the game: rows, then columns, then both diagonals.
const LINES: [[Move; 3]; 8] = [
    // Rows
    [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)],
    [Move::new(1, 0), Move::new(1, 1), Move::new(1, 2)],
    [Move::new(2, 0), Move::new(2, 1), Move::new(2, 2)],
    // Columns
    [Move::new(0, 0), Move::new(1, 0), Move::new(2, 0)],
    [Move::new(0, 1), Move::new(1, 1), Move::new(2, 1)],
    [Move::new(0, 2), Move::new(1, 2), Move::new(2, 2)],
    // Diagonals
    [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)],
    [Move::new(2, 0), Move::new(1, 1), Move::new(0, 2)],
];

/// Returns the player holding a complete line, if any.
///
/// A board reached by legal play has at most one such player.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a)?;
        match sq {
            Square::Occupied(player) if Some(sq) == board.get(b) && Some(sq) == board.get(c) => {
                Some(player)
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(player: Player, line: [Move; 3]) -> Board {
        let mut board = Board::new();
        for mv in line {
            board.set(mv, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            assert_eq!(winner(&board_with(Player::X, line)), Some(Player::X));
            assert_eq!(winner(&board_with(Player::O, line)), Some(Player::O));
        }
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "..O/.O./O..".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board: Board = "XXO/.../...".parse().unwrap();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(winner(&board), None);
    }
}
