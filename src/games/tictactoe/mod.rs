mod minimax;
mod position;
mod rules;
mod transition;
mod types;

pub use minimax::{optimal_move, search, SearchResult};
pub use position::Move;
pub use rules::{is_full, is_terminal, status, utility, winner, Score};
pub use transition::{apply_move, current_player, initial_state, legal_moves, undo_move};
pub use types::{Board, GameStatus, Player, Square};
