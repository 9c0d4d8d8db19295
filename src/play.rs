//! Contestants and the match loop.
//!
//! The engine library knows nothing about turns being taken by people or
//! programs. This module is the caller side: it asks a [`Contestant`] for each
//! move, applies it, and stops when the board is terminal.

use crate::games::tictactoe::{
    Board, GameStatus, Move, Player, apply_move, current_player, initial_state, is_terminal,
    optimal_move, status,
};
use anyhow::{Context, Result, anyhow, bail};
use derive_getters::Getters;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Something that picks moves.
pub trait Contestant {
    /// Chooses a legal move for the side to move on `board`.
    fn choose_move(&mut self, board: &Board) -> Result<Move>;

    /// Returns the contestant's display name.
    fn name(&self) -> &str;
}

/// Plays the minimax move every turn.
#[derive(Debug, Clone, Default)]
pub struct Engine;

impl Contestant for Engine {
    #[instrument(skip(self, board))]
    fn choose_move(&mut self, board: &Board) -> Result<Move> {
        let mut scratch = board.clone();
        optimal_move(&mut scratch).ok_or_else(|| anyhow!("no move available, game is over"))
    }

    fn name(&self) -> &str {
        "Engine"
    }
}

/// Reads moves typed by a person.
///
/// Unparsable or illegal input is reported on `output` and asked for again.
#[derive(Debug)]
pub struct Human<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Human<R, W> {
    /// Creates a human contestant reading from `input` and prompting on `output`.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Gives back the prompt writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Contestant for Human<R, W> {
    #[instrument(skip(self, board), fields(name = %self.name))]
    fn choose_move(&mut self, board: &Board) -> Result<Move> {
        loop {
            writeln!(self.output, "\n{}\n", board)?;
            write!(
                self.output,
                "{} ({}), your move [row col, or 1-9]: ",
                self.name,
                current_player(board)
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("input closed before {} moved", self.name);
            }

            let mv: Move = match line.parse() {
                Ok(mv) => mv,
                Err(e) => {
                    debug!(input = line.trim(), "Unparsable move");
                    writeln!(self.output, "{}", e.message)?;
                    continue;
                }
            };

            match apply_move(&mut board.clone(), mv) {
                Ok(_) => return Ok(mv),
                Err(e) => {
                    warn!(%e, "Rejected move");
                    writeln!(self.output, "Can't play {}: {}", mv, e.kind)?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Result of a finished match.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct MatchReport {
    /// Final board.
    board: Board,
    /// How the game ended.
    status: GameStatus,
    /// Moves in the order they were played, X first.
    moves: Vec<Move>,
}

/// Plays one game from the empty board, announcing each move on `out`.
#[instrument(skip_all, fields(x = x.name(), o = o.name()))]
pub fn play_match(
    x: &mut dyn Contestant,
    o: &mut dyn Contestant,
    out: &mut dyn Write,
) -> Result<MatchReport> {
    let mut board = initial_state();
    let mut moves = Vec::with_capacity(9);

    while !is_terminal(&board) {
        let side = current_player(&board);
        let contestant: &mut dyn Contestant = match side {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };

        let mv = contestant.choose_move(&board)?;
        apply_move(&mut board, mv)
            .with_context(|| format!("{} chose an illegal move", contestant.name()))?;
        info!(%side, %mv, "Move played");
        writeln!(out, "{} ({}) plays {}", contestant.name(), side, mv)?;
        moves.push(mv);
    }

    let status = status(&board);
    info!(%status, moves = moves.len(), "Match finished");
    writeln!(out, "\n{}\n\n{}", board, status)?;

    Ok(MatchReport {
        board,
        status,
        moves,
    })
}
