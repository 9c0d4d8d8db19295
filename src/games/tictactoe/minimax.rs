//! Exhaustive minimax search.
//!
//! The search walks the whole game tree on a single board, placing each trial
//! move and clearing it again on the way back up. X maximizes the [`Score`],
//! O minimizes it. Among equally good moves the first one in row-major order
//! is kept, so results are reproducible.

use super::rules::{is_terminal, utility, Score};
use super::transition::{apply_move, current_player, legal_moves, undo_move};
use super::{Board, GameStatus, Move, Player};
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument};

/// Outcome of searching a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchResult {
    /// Value of the position under optimal play by both sides.
    pub score: Score,
    /// Move achieving `score`, or `None` when the board is already terminal.
    pub best: Option<Move>,
}

impl SearchResult {
    /// How the game ends if both sides keep playing optimally from here.
    pub fn predicted(&self) -> GameStatus {
        match self.score {
            s if s > 0 => GameStatus::Won(Player::X),
            s if s < 0 => GameStatus::Won(Player::O),
            _ => GameStatus::Draw,
        }
    }
}

/// A trial move held on the board for as long as the guard lives.
///
/// Dropping the guard clears the square, so every exit from a search frame
/// hands the board back unchanged.
struct Placement<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl<'a> Placement<'a> {
    /// Places `mv` for the side to move. `None` if the square cannot take it.
    fn new(board: &'a mut Board, mv: Move) -> Option<Self> {
        apply_move(board, mv).ok()?;
        Some(Self { board, mv })
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        undo_move(self.board, self.mv);
    }
}

/// Whether `candidate` beats `incumbent` for `side`. Ties never do.
fn improves(side: Player, candidate: Score, incumbent: Score) -> bool {
    match side {
        Player::X => candidate > incumbent,
        Player::O => candidate < incumbent,
    }
}

fn search_node(board: &mut Board) -> SearchResult {
    if is_terminal(board) {
        return SearchResult {
            score: utility(board),
            best: None,
        };
    }

    let side = current_player(board);
    let mut best: Option<(Score, Move)> = None;

    for mv in legal_moves(board) {
        let Some(mut placed) = Placement::new(board, mv) else {
            continue;
        };
        let score = search_node(&mut placed).score;
        drop(placed);

        let keep = match best {
            None => true,
            Some((incumbent, _)) => improves(side, score, incumbent),
        };
        if keep {
            best = Some((score, mv));
        }
    }

    match best {
        Some((score, mv)) => SearchResult {
            score,
            best: Some(mv),
        },
        None => SearchResult {
            score: utility(board),
            best: None,
        },
    }
}

/// Searches the full game tree below `board`.
///
/// The board is borrowed mutably for the duration of the search and is
/// returned with exactly the contents it had on entry.
#[instrument(skip(board))]
pub fn search(board: &mut Board) -> SearchResult {
    debug!(to_move = %current_player(board), "Starting search");
    let result = search_node(board);
    debug!(score = result.score, best = ?result.best, "Search complete");
    result
}

/// Returns the best move for the side to move, or `None` if the game is over.
#[instrument(skip(board))]
pub fn optimal_move(board: &mut Board) -> Option<Move> {
    if is_terminal(board) {
        debug!("Board is terminal, no move to make");
        return None;
    }
    search(board).best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_restores_on_drop() {
        let mut board: Board = "X../.O./...".parse().unwrap();
        let before = board.clone();
        {
            let placed = Placement::new(&mut board, Move::new(2, 2)).unwrap();
            assert_ne!(*placed, before);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_placement_rejects_taken_square() {
        let mut board: Board = "X../.../...".parse().unwrap();
        assert!(Placement::new(&mut board, Move::new(0, 0)).is_none());
        assert_eq!(board, "X../.../...".parse::<Board>().unwrap());
    }

    #[test]
    fn test_ties_keep_first_move() {
        assert!(!improves(Player::X, 0, 0));
        assert!(!improves(Player::O, 0, 0));
        assert!(improves(Player::X, 1, 0));
        assert!(improves(Player::O, -1, 0));
    }
}
