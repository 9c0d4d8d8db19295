//! Strictly Minimax - command line
//!
//! Plays tic-tac-toe against the minimax engine or analyses a position.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io::{self, Write};
use std::path::PathBuf;
use strictly_minimax::{
    Board, Engine, Human, Player, PlayConfig, play_match, search, status,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, human } => run_play(config, human),
        Command::Best { board } => {
            init_tracing(PlayConfig::default().log_filter());
            run_best(&board)
        }
    }
}

/// Installs the fmt subscriber. `RUST_LOG` takes precedence over `fallback`.
fn init_tracing(fallback: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Run an interactive (or engine-only) match
fn run_play(config_path: Option<PathBuf>, human: Option<Player>) -> Result<()> {
    let config = match config_path {
        Some(path) => PlayConfig::from_file(path)?,
        None => PlayConfig::default(),
    }
    .with_human(human);

    init_tracing(config.log_filter());
    info!(human = ?config.human(), "Starting match");

    let stdin = io::stdin();
    let mut person = Human::new("You", stdin.lock(), io::stdout());
    let mut out = io::stdout();

    let report = match config.human() {
        Some(Player::X) => play_match(&mut person, &mut Engine, &mut out)?,
        Some(Player::O) => play_match(&mut Engine, &mut person, &mut out)?,
        None => play_match(&mut Engine, &mut Engine, &mut out)?,
    };
    out.flush()?;

    info!(status = %report.status(), "Done");
    Ok(())
}

/// Print the optimal move for a board given on the command line
#[instrument]
fn run_best(text: &str) -> Result<()> {
    let mut board: Board = text.parse()?;
    let mut out = io::stdout();

    let result = search(&mut board);
    match result.best {
        Some(mv) => {
            writeln!(out, "{}\n", board)?;
            writeln!(out, "Best move: {}", mv)?;
            writeln!(out, "Predicted outcome: {}", result.predicted())?;
        }
        None => writeln!(out, "Game over: {}", status(&board))?,
    }
    Ok(())
}
