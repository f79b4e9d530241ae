//! Othello-Rust: two-player Othello in the terminal.
//!
//! ## Usage
//!
//! - `othello-rust` - Play with Black moving first
//! - `othello-rust --first white` - Let White open
//! - `othello-rust --hints` - List legal moves before each prompt
//!
//! Moves are entered as `row col`, both 0-7. Type `quit` to leave.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use othello_rust::board::Player;
use othello_rust::console::{Console, SessionEnd};
use othello_rust::game::Game;

/// Othello-Rust: two-player Othello in the terminal
#[derive(Parser)]
#[command(name = "othello-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Color that makes the first move
    #[arg(long, value_enum, default_value_t = Color::Black)]
    first: Color,

    /// List the legal moves before each prompt
    #[arg(long)]
    hints: bool,

    /// Log filter used when RUST_LOG is unset (logs go to stderr)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Color {
    Black,
    White,
}

impl From<Color> for Player {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Player::Black,
            Color::White => Player::White,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let first = Player::from(cli.first);
    info!(%first, hints = cli.hints, "starting game");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "<<<<< Welcome to the game of Othello >>>>>")?;
    writeln!(stdout, "{first} ({}) moves first.", first.glyph())?;

    let mut game = Game::with_first_player(first);
    let end = Console::new(stdin.lock(), stdout.lock())
        .with_hints(cli.hints)
        .run(&mut game)
        .context("console session failed")?;

    match end {
        SessionEnd::Finished(outcome) => info!(?outcome, "game finished"),
        SessionEnd::Quit => println!("Game abandoned."),
    }
    Ok(())
}
