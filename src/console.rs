//! Line-oriented text front end.
//!
//! Renders the board, reads `row col` pairs until the player to move supplies
//! a legal cell, and reports the result when the game ends. Malformed,
//! off-board and illegal input is rejected with a message and re-requested;
//! it never ends the game.
//!
//! ## Example
//!
//! ```
//! use std::io::Cursor;
//! use othello_rust::console::{Console, SessionEnd};
//! use othello_rust::game::Game;
//!
//! let mut game = Game::new();
//! let mut out = Vec::new();
//! let mut console = Console::new(Cursor::new("2 3\nquit\n"), &mut out);
//! assert_eq!(console.run(&mut game).unwrap(), SessionEnd::Quit);
//! assert_eq!(game.moves_played(), 1);
//! ```

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, warn};

use crate::board::{Board, Player, Point};
use crate::game::{Game, Outcome, Status};

/// Command that abandons the game.
const QUIT_COMMAND: &str = "quit";

const MSG_INVALID_INPUT: &str = "Sorry, invalid input. Try again.";
const MSG_INVALID_MOVE: &str = "Sorry, that is not a valid move. Try again.";

/// Why a line could not be read as a coordinate pair.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    #[error("expected two numbers, got {0} tokens")]
    WrongArity(usize),
    #[error("not a number: {0:?}")]
    NotANumber(String),
}

/// Parse `"row col"` (whitespace separated, zero-based).
///
/// Range checking is left to the caller.
pub fn parse_move(line: &str) -> Result<Point, ParseMoveError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = tokens[..] else {
        return Err(ParseMoveError::WrongArity(tokens.len()));
    };
    let number = |s: &str| {
        s.parse::<usize>()
            .map_err(|_| ParseMoveError::NotANumber(s.to_string()))
    };
    Ok((number(row)?, number(col)?))
}

/// How a console session ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Finished(Outcome),
    Quit,
}

/// Text console driving a [`Game`] over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    /// List the legal moves before each prompt.
    hints: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            hints: false,
        }
    }

    pub fn with_hints(mut self, hints: bool) -> Self {
        self.hints = hints;
        self
    }

    /// Play `game` to completion.
    ///
    /// Fails with `UnexpectedEof` if input ends before the game does.
    pub fn run(&mut self, game: &mut Game) -> io::Result<SessionEnd> {
        while let Status::AwaitingMove(player) = game.status() {
            if let Some(passed) = game.last_pass() {
                writeln!(
                    self.output,
                    "No valid moves available for {}. You lose your turn.",
                    passed.glyph()
                )?;
            }
            write!(self.output, "{}", game.board())?;

            let Some(point) = self.request_move(game, player)? else {
                debug!(moves = game.moves_played(), "player quit");
                return Ok(SessionEnd::Quit);
            };
            if let Err(err) = game.play(point) {
                // request_move only hands back legal cells.
                warn!(%err, player = %player, "validated move rejected");
                writeln!(self.output, "{MSG_INVALID_MOVE}")?;
            }
        }

        let outcome = self.report(game)?;
        Ok(SessionEnd::Finished(outcome))
    }

    /// Prompt until a legal cell is entered. `None` means the player quit.
    fn request_move(&mut self, game: &Game, player: Player) -> io::Result<Option<Point>> {
        let legal = game.legal_moves();

        if self.hints {
            let listing: Vec<String> = legal.iter().map(|(r, c)| format!("{r} {c}")).collect();
            writeln!(self.output, "Legal moves: {}", listing.join(", "))?;
        }

        loop {
            write!(self.output, "{} it is your move (row col): ", player.glyph())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before the game ended",
                ));
            }
            let line = line.trim();
            if line.eq_ignore_ascii_case(QUIT_COMMAND) {
                return Ok(None);
            }

            match parse_move(line) {
                Ok((row, col)) if !Board::contains(row, col) => {
                    debug!(row, col, "coordinate off the board");
                    writeln!(self.output, "{MSG_INVALID_INPUT}")?;
                }
                Ok(point) if legal.contains(&point) => return Ok(Some(point)),
                Ok((row, col)) => {
                    debug!(row, col, player = %player, "not a legal move");
                    writeln!(self.output, "{MSG_INVALID_MOVE}")?;
                }
                Err(err) => {
                    debug!(%err, input = line, "unparseable move");
                    writeln!(self.output, "{MSG_INVALID_INPUT}")?;
                }
            }
        }
    }

    fn report(&mut self, game: &Game) -> io::Result<Outcome> {
        write!(self.output, "{}", game.board())?;
        writeln!(self.output, "Score: {}", game.score())?;

        let outcome = game
            .winner()
            .ok_or_else(|| io::Error::other("report requested before the game ended"))?;
        match outcome {
            Outcome::Winner(player) => {
                writeln!(self.output, "Game over. The winner is {player}.")?
            }
            Outcome::Tie => writeln!(self.output, "Game over. It's a tie.")?,
        }
        self.output.flush()?;
        Ok(outcome)
    }
}
