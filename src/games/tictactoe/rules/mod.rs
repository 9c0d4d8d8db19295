//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board according to tic-tac-toe rules.
//! Rules are kept apart from board storage so the search can call them
//! on every node without touching game bookkeeping.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::is_full;
pub use outcome::{is_terminal, status, utility, Score};
pub use win::winner;
