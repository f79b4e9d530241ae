//! Move validation and application.
//!
//! A cell is a legal destination for a player when it is empty and placing
//! there captures at least one opponent piece. A [`Move`] is only meaningful
//! for the board it was computed on; nothing here caches legality across
//! mutations.

use std::collections::BTreeSet;

use tracing::debug;

use crate::board::{Board, Cell, Player, Point};
use crate::capture::{Direction, captures_by_direction};
use crate::error::GameError;

/// A placement together with everything it captures, broken out per ray.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub point: Point,
    pub player: Player,
    /// Non-empty capture runs in scan order.
    pub captures: Vec<(Direction, Vec<Point>)>,
}

impl Move {
    /// All captured cells, deduplicated across rays.
    pub fn flipped(&self) -> BTreeSet<Point> {
        self.captures
            .iter()
            .flat_map(|(_, run)| run.iter().copied())
            .collect()
    }
}

/// Compute the move `player` would make at `(row, col)`.
///
/// Returns `Ok(None)` when the cell is occupied or captures nothing.
pub fn evaluate_move(
    board: &Board,
    row: usize,
    col: usize,
    player: Player,
) -> Result<Option<Move>, GameError> {
    if board.get(row, col)? != Cell::Empty {
        return Ok(None);
    }
    let captures = captures_by_direction(board, row, col, player);
    if captures.is_empty() {
        return Ok(None);
    }
    Ok(Some(Move {
        point: (row, col),
        player,
        captures,
    }))
}

/// Whether `(row, col)` is a legal destination for `player`.
/// Off-board coordinates are simply not legal.
pub fn is_legal(board: &Board, row: usize, col: usize, player: Player) -> bool {
    matches!(evaluate_move(board, row, col, player), Ok(Some(_)))
}

/// Every legal destination for `player`, ordered by `(row, col)`.
///
/// An empty set means the player cannot move; that is a normal result.
pub fn legal_moves(board: &Board, player: Player) -> BTreeSet<Point> {
    Board::points()
        .filter(|&(row, col)| is_legal(board, row, col, player))
        .collect()
}

/// Whether `player` has at least one legal move.
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    Board::points().any(|(row, col)| is_legal(board, row, col, player))
}

/// Place `player`'s piece at `(row, col)` and flip everything it captures.
///
/// The move is fully validated before the board is touched, so on error the
/// board is unchanged.
pub fn apply_move(
    board: &mut Board,
    row: usize,
    col: usize,
    player: Player,
) -> Result<Move, GameError> {
    let mv = evaluate_move(board, row, col, player)?
        .ok_or(GameError::IllegalMove { row, col })?;

    let piece = player.cell();
    board.set(row, col, piece)?;
    for (r, c) in mv.flipped() {
        board.set(r, c, piece)?;
    }

    debug!(
        player = %player,
        row,
        col,
        flipped = mv.flipped().len(),
        "applied move"
    );
    Ok(mv)
}
