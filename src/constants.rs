//! Board geometry and fixed game parameters.
//!
//! The engine plays on a fixed 8x8 grid. Coordinates are `(row, col)` pairs,
//! both zero-based, with `(0, 0)` in the upper-left corner.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 8;

/// The eight ray directions as `(d_row, d_col)` steps.
///
/// Orthogonal first, then diagonals. Each ray is scanned independently.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

// =============================================================================
// Starting Position
// =============================================================================

/// Black's two starting pieces.
pub const BLACK_START: [(usize, usize); 2] = [(3, 4), (4, 3)];

/// White's two starting pieces.
pub const WHITE_START: [(usize, usize); 2] = [(3, 3), (4, 4)];

// =============================================================================
// Text Glyphs
// =============================================================================

/// Rendered glyph for an empty cell.
pub const GLYPH_EMPTY: char = ' ';

/// Rendered glyph for a black piece.
pub const GLYPH_BLACK: char = 'B';

/// Rendered glyph for a white piece.
pub const GLYPH_WHITE: char = 'W';

/// Glyph accepted for an empty cell in board diagrams (besides a space).
pub const DIAGRAM_EMPTY: char = '.';
