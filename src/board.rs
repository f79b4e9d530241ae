//! The 8x8 grid of cells.
//!
//! `Board` is pure storage: bounds-checked reads and writes, counting, and the
//! text rendering used by the console. It enforces no game rules; those live
//! in [`crate::rules`].

use std::fmt;
use std::str::FromStr;

use crate::constants::{
    BLACK_START, DIAGRAM_EMPTY, GLYPH_BLACK, GLYPH_EMPTY, GLYPH_WHITE, N, WHITE_START,
};
use crate::error::GameError;

/// A cell on the board as `(row, col)`.
pub type Point = (usize, usize);

/// One of the two players.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// The other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// The piece this player places.
    pub fn cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }

    pub fn glyph(self) -> char {
        self.cell().glyph()
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    fn not(self) -> Self {
        self.opponent()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}

/// State of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => GLYPH_EMPTY,
            Cell::Black => GLYPH_BLACK,
            Cell::White => GLYPH_WHITE,
        }
    }

    fn from_diagram(ch: char) -> Option<Self> {
        match ch {
            DIAGRAM_EMPTY => Some(Cell::Empty),
            GLYPH_BLACK => Some(Cell::Black),
            GLYPH_WHITE => Some(Cell::White),
            _ => None,
        }
    }
}

/// Fixed-size 8x8 grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; N]; N],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting position: two pieces per player in the center.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for (row, col) in BLACK_START {
            board.cells[row][col] = Cell::Black;
        }
        for (row, col) in WHITE_START {
            board.cells[row][col] = Cell::White;
        }
        board
    }

    /// A board with every cell empty.
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; N]; N],
        }
    }

    /// Whether `(row, col)` lies on the board.
    pub fn contains(row: usize, col: usize) -> bool {
        row < N && col < N
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        if !Self::contains(row, col) {
            return Err(GameError::OutOfRange { row, col });
        }
        Ok(self.cells[row][col])
    }

    /// Overwrite a cell. No rule checking happens here.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GameError> {
        if !Self::contains(row, col) {
            return Err(GameError::OutOfRange { row, col });
        }
        self.cells[row][col] = cell;
        Ok(())
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&c| c != Cell::Empty)
    }

    /// Number of cells holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Every point on the board in row-major order.
    pub fn points() -> impl Iterator<Item = Point> {
        (0..N).flat_map(|row| (0..N).map(move |col| (row, col)))
    }
}

fn write_column_header(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("  ")?;
    for col in 0..N {
        write!(f, "{col} ")?;
    }
    writeln!(f)
}

/// Renders the grid with row labels on both edges and column headers above
/// and below.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_column_header(f)?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{row} ")?;
            for cell in cells {
                write!(f, "{} ", cell.glyph())?;
            }
            writeln!(f, "{row}")?;
        }
        write_column_header(f)
    }
}

/// Parse a board diagram: eight non-blank lines of eight cells each, using
/// `.` for empty, `B` and `W` for pieces. Whitespace inside a line is ignored.
impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Self::empty();
        let mut rows = 0;

        for line in s.lines().filter(|l| !l.trim().is_empty()) {
            if rows == N {
                return Err(GameError::InvalidDiagram(format!(
                    "more than {N} rows"
                )));
            }
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != N {
                return Err(GameError::InvalidDiagram(format!(
                    "row {rows} has {} cells, expected {N}",
                    cells.len()
                )));
            }
            for (col, ch) in cells.into_iter().enumerate() {
                board.cells[rows][col] = Cell::from_diagram(ch).ok_or_else(|| {
                    GameError::InvalidDiagram(format!("unexpected character {ch:?}"))
                })?;
            }
            rows += 1;
        }

        if rows != N {
            return Err(GameError::InvalidDiagram(format!(
                "found {rows} rows, expected {N}"
            )));
        }
        Ok(board)
    }
}
