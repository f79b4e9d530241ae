//! Directional capture resolution.
//!
//! A placement captures along a ray when the ray holds one or more opponent
//! pieces immediately followed by one of the player's own pieces. Each of the
//! eight rays is scanned independently and never wraps around an edge.

use std::collections::BTreeSet;

use crate::board::{Board, Cell, Player, Point};
use crate::constants::DIRECTIONS;

/// A ray direction as `(d_row, d_col)`.
pub type Direction = (isize, isize);

/// Step one cell from `(row, col)` along `dir`, or `None` if that leaves the board.
fn step((row, col): Point, (d_row, d_col): Direction) -> Option<Point> {
    let row = row.checked_add_signed(d_row)?;
    let col = col.checked_add_signed(d_col)?;
    Board::contains(row, col).then_some((row, col))
}

/// Cells that `player` would capture along one ray from `(row, col)`.
///
/// Returns an empty list when the ray runs off the board, reaches an empty
/// cell, or reaches the player's own piece before any opponent piece. The
/// origin cell itself is never inspected. An origin off the board, or a step
/// that is not one of [`DIRECTIONS`], captures nothing.
pub fn resolve_direction(
    board: &Board,
    row: usize,
    col: usize,
    d_row: isize,
    d_col: isize,
    player: Player,
) -> Vec<Point> {
    if !Board::contains(row, col) || !DIRECTIONS.contains(&(d_row, d_col)) {
        return Vec::new();
    }

    let own = player.cell();
    let theirs = player.opponent().cell();
    let mut run = Vec::new();
    let mut cursor = (row, col);

    while let Some(next) = step(cursor, (d_row, d_col)) {
        // `step` already bounds-checked `next`.
        let cell = board.get(next.0, next.1).unwrap_or(Cell::Empty);
        if cell == theirs {
            run.push(next);
        } else if cell == own {
            return run;
        } else {
            break;
        }
        cursor = next;
    }
    Vec::new()
}

/// Captures along every ray that yields at least one piece, in [`DIRECTIONS`] order.
pub fn captures_by_direction(
    board: &Board,
    row: usize,
    col: usize,
    player: Player,
) -> Vec<(Direction, Vec<Point>)> {
    DIRECTIONS
        .iter()
        .map(|&(d_row, d_col)| {
            (
                (d_row, d_col),
                resolve_direction(board, row, col, d_row, d_col, player),
            )
        })
        .filter(|(_, run)| !run.is_empty())
        .collect()
}

/// Union of the captures along all eight rays, deduplicated by cell.
pub fn captures_at(board: &Board, row: usize, col: usize, player: Player) -> BTreeSet<Point> {
    captures_by_direction(board, row, col, player)
        .into_iter()
        .flat_map(|(_, run)| run)
        .collect()
}
