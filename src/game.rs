//! Turn control and end-of-game detection.
//!
//! [`Game`] owns the board and the player to move and is the only thing that
//! mutates them during play. After every transition it settles into one of
//! two states:
//!
//! - `AwaitingMove(p)`: `p` has at least one legal move.
//! - `GameOver(reason)`: the board is full, or neither player can move.
//!
//! A player with no legal move whose opponent can still move passes
//! automatically; the pass is recorded so a front end can announce it.

use std::collections::BTreeSet;
use std::fmt;

use tracing::{debug, info};

use crate::board::{Board, Cell, Player, Point};
use crate::error::GameError;
use crate::rules::{Move, apply_move, has_legal_move, legal_moves};

/// Why a game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    BoardFull,
    NoMovesForEitherPlayer,
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOverReason::BoardFull => f.write_str("the board is full"),
            GameOverReason::NoMovesForEitherPlayer => {
                f.write_str("neither player has a legal move")
            }
        }
    }
}

/// Controller state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    AwaitingMove(Player),
    GameOver(GameOverReason),
}

/// Final result of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Tie,
}

/// Piece counts for both players.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

impl Score {
    pub fn of(board: &Board) -> Self {
        Self {
            black: board.count(Cell::Black),
            white: board.count(Cell::White),
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B {} - W {}", self.black, self.white)
    }
}

/// Decide the winner by piece count. Empty cells are not awarded to anyone.
pub fn determine_winner(board: &Board) -> Outcome {
    let score = Score::of(board);
    match score.black.cmp(&score.white) {
        std::cmp::Ordering::Greater => Outcome::Winner(Player::Black),
        std::cmp::Ordering::Less => Outcome::Winner(Player::White),
        std::cmp::Ordering::Equal => Outcome::Tie,
    }
}

/// A game in progress (or finished).
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: Status,
    /// Player whose turn was skipped during the last transition.
    last_pass: Option<Player>,
    moves_played: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard start: initial position, Black to move.
    pub fn new() -> Self {
        Self::with_first_player(Player::Black)
    }

    /// Initial position with `first` to move.
    pub fn with_first_player(first: Player) -> Self {
        Self::from_position(Board::new(), first)
    }

    /// Start from an arbitrary position. The game settles immediately, so the
    /// result may already be over or may have passed `to_move`'s turn.
    pub fn from_position(board: Board, to_move: Player) -> Self {
        let mut game = Self {
            board,
            to_move,
            status: Status::AwaitingMove(to_move),
            last_pass: None,
            moves_played: 0,
        };
        game.settle();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// The player to move, or `None` once the game is over.
    pub fn current_player(&self) -> Option<Player> {
        match self.status {
            Status::AwaitingMove(player) => Some(player),
            Status::GameOver(_) => None,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, Status::GameOver(_))
    }

    /// The player whose turn was skipped by the most recent transition.
    pub fn last_pass(&self) -> Option<Player> {
        self.last_pass
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    pub fn score(&self) -> Score {
        Score::of(&self.board)
    }

    /// Legal destinations for the player to move; empty once the game is over.
    pub fn legal_moves(&self) -> BTreeSet<Point> {
        match self.status {
            Status::AwaitingMove(player) => legal_moves(&self.board, player),
            Status::GameOver(_) => BTreeSet::new(),
        }
    }

    /// The result, available only after the game has ended.
    pub fn winner(&self) -> Option<Outcome> {
        self.is_over().then(|| determine_winner(&self.board))
    }

    /// Play `point` for the player to move, then hand the turn over.
    ///
    /// On any error the game is left exactly as it was.
    pub fn play(&mut self, (row, col): Point) -> Result<Move, GameError> {
        let Status::AwaitingMove(player) = self.status else {
            return Err(GameError::GameOver);
        };

        let mv = apply_move(&mut self.board, row, col, player)?;
        self.moves_played += 1;
        self.to_move = player.opponent();
        self.last_pass = None;
        self.settle();
        Ok(mv)
    }

    /// Resolve the status for `to_move`, passing or ending the game as needed.
    fn settle(&mut self) {
        if self.board.is_full() {
            self.finish(GameOverReason::BoardFull);
            return;
        }
        if has_legal_move(&self.board, self.to_move) {
            self.status = Status::AwaitingMove(self.to_move);
            return;
        }

        let other = self.to_move.opponent();
        if has_legal_move(&self.board, other) {
            info!(player = %self.to_move, "no legal move, passing");
            self.last_pass = Some(self.to_move);
            self.to_move = other;
            self.status = Status::AwaitingMove(other);
        } else {
            self.finish(GameOverReason::NoMovesForEitherPlayer);
        }
    }

    fn finish(&mut self, reason: GameOverReason) {
        self.status = Status::GameOver(reason);
        let score = self.score();
        info!(%reason, %score, moves = self.moves_played, "game over");
        debug!(outcome = ?determine_winner(&self.board), "final result");
    }
}
