//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use strictly_minimax::Player;

/// Strictly Minimax - tic-tac-toe that never loses
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Perfect-play tic-tac-toe engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Path to a TOML play config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Side to play yourself (x or o); omit to watch the engine play itself
        #[arg(long)]
        human: Option<Player>,
    },

    /// Print the optimal move for a position
    Best {
        /// Board as nine cells, e.g. "XX./.O./..." (X, O, and . for empty)
        board: String,
    },
}
