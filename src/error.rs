//! Error types for the rules engine.

use thiserror::Error;

/// Errors raised by board access and move application.
///
/// An empty set of legal moves is never an error; it is a normal answer from
/// [`crate::rules::legal_moves`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate outside `[0, 8) x [0, 8)`.
    #[error("coordinate ({row}, {col}) is off the board")]
    OutOfRange { row: usize, col: usize },

    /// Placement that is not in the current player's legal-move set.
    #[error("illegal move at ({row}, {col})")]
    IllegalMove { row: usize, col: usize },

    /// A move was attempted after the game ended.
    #[error("the game is already over")]
    GameOver,

    /// A board diagram could not be parsed.
    #[error("invalid board diagram: {0}")]
    InvalidDiagram(String),
}
