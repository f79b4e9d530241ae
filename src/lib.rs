//! Othello-Rust: a two-player Othello (Reversi) rules engine with a text front end.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, ray directions, starting squares, glyphs
//! - [`board`] - The 8x8 grid, cells and players
//! - [`capture`] - Directional capture resolution
//! - [`rules`] - Legal-move enumeration and move application
//! - [`game`] - Turn control, passing, end-of-game and winner
//! - [`console`] - Line-based text interface
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use othello_rust::board::Player;
//! use othello_rust::game::{Game, Status};
//!
//! let mut game = Game::new();
//! assert_eq!(game.legal_moves().len(), 4);
//!
//! let mv = game.play((2, 3)).unwrap();
//! assert_eq!(mv.flipped().len(), 1);
//! assert_eq!(game.status(), Status::AwaitingMove(Player::White));
//! ```

pub mod board;
pub mod capture;
pub mod console;
pub mod constants;
pub mod error;
pub mod game;
pub mod rules;
