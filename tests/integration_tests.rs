//! Integration tests for othello-rust
//!
//! Rules properties checked against hand-built positions, complete games
//! replayed move by move, and randomized playouts from fixed seeds.

use std::collections::BTreeSet;

use othello_rust::board::{Board, Cell, Player, Point};
use othello_rust::capture::{captures_at, resolve_direction};
use othello_rust::constants::{DIRECTIONS, N};
use othello_rust::error::GameError;
use othello_rust::game::{Game, GameOverReason, Outcome, Score, Status, determine_winner};
use othello_rust::rules::{apply_move, legal_moves};

// =============================================================================
// Helper functions
// =============================================================================

fn board(diagram: &str) -> Board {
    diagram.parse().expect("valid diagram")
}

/// Replay `moves` from the initial position, asserting each is accepted.
fn replay(moves: &[Point]) -> Game {
    let mut game = Game::new();
    for &mv in moves {
        game.play(mv)
            .unwrap_or_else(|e| panic!("move {mv:?} rejected: {e}"));
    }
    game
}

/// A nine-move game in which Black captures every white piece.
const WIPEOUT: [Point; 9] = [
    (4, 5),
    (5, 5),
    (2, 3),
    (2, 4),
    (2, 5),
    (3, 5),
    (6, 6),
    (6, 5),
    (7, 5),
];

/// A game where White is forced to pass before Black's last move.
const WHITE_PASSES: [Point; 14] = [
    (3, 2),
    (2, 2),
    (4, 5),
    (3, 1),
    (1, 1),
    (1, 3),
    (3, 0),
    (4, 0),
    (5, 0),
    (5, 5),
    (6, 6),
    (3, 5),
    (3, 6),
    (0, 4),
];

// =============================================================================
// Initial setup and capture examples
// =============================================================================

#[test]
fn test_initial_setup() {
    let b = Board::new();
    let occupied: Vec<(Point, Cell)> = Board::points()
        .map(|(r, c)| ((r, c), b.get(r, c).unwrap()))
        .filter(|(_, cell)| *cell != Cell::Empty)
        .collect();
    assert_eq!(
        occupied,
        vec![
            ((3, 3), Cell::White),
            ((3, 4), Cell::Black),
            ((4, 3), Cell::Black),
            ((4, 4), Cell::White),
        ]
    );
}

#[test]
fn test_black_opening_moves() {
    let b = Board::new();
    assert_eq!(
        legal_moves(&b, Player::Black),
        BTreeSet::from([(2, 3), (3, 2), (4, 5), (5, 4)])
    );

    let mut after = b.clone();
    let mv = apply_move(&mut after, 2, 3, Player::Black).unwrap();
    assert_eq!(mv.flipped(), BTreeSet::from([(3, 3)]));
    assert_eq!(after.get(2, 3), Ok(Cell::Black));
    assert_eq!(after.get(3, 3), Ok(Cell::Black));
    assert_eq!(after.get(4, 3), Ok(Cell::Black));
    assert_eq!(after.get(3, 4), Ok(Cell::Black));
    assert_eq!(after.get(4, 4), Ok(Cell::White));
}

#[test]
fn test_edge_scans_stay_on_board() {
    let b = board(
        "
        W W W W W W W W
        W B B B B B B W
        W B . . . . B W
        W B . . . . B W
        W B . . . . B W
        W B . . . . B W
        W B B B B B B W
        W W W W W W W W
        ",
    );
    for c in 0..N {
        assert!(resolve_direction(&b, 0, c, -1, 0, Player::Black).is_empty());
        assert!(resolve_direction(&b, 7, c, 1, 0, Player::Black).is_empty());
    }
    for r in 0..N {
        assert!(resolve_direction(&b, r, 0, 0, -1, Player::White).is_empty());
        assert!(resolve_direction(&b, r, 7, 0, 1, Player::White).is_empty());
    }
    // Black has no white piece it can bracket; white brackets the black ring
    // against the outer wall.
    assert!(legal_moves(&b, Player::Black).is_empty());
    assert_eq!(
        captures_at(&b, 2, 2, Player::White),
        BTreeSet::from([(1, 1), (1, 2), (1, 3), (2, 1), (3, 1)])
    );
}

// =============================================================================
// Terminal detection and winner
// =============================================================================

#[test]
fn test_wipeout_game() {
    let game = replay(&WIPEOUT);
    assert_eq!(
        game.status(),
        Status::GameOver(GameOverReason::NoMovesForEitherPlayer)
    );
    assert_eq!(game.score(), Score { black: 13, white: 0 });
    assert_eq!(game.winner(), Some(Outcome::Winner(Player::Black)));
    assert_eq!(game.moves_played(), 9);
    assert_eq!(
        game.board(),
        &board(
            "
            ........
            ........
            ...BBB..
            ...BBB..
            ...BBB..
            .....B..
            .....BB.
            .....B..
            "
        )
    );
}

#[test]
fn test_forced_pass_mid_game() {
    let moves = WHITE_PASSES;
    let (before_pass, last) = moves.split_at(moves.len() - 1);
    let mut game = replay(before_pass);

    // White has nothing after Black's (3, 6); the turn comes straight back.
    assert_eq!(game.last_pass(), Some(Player::White));
    assert_eq!(game.current_player(), Some(Player::Black));
    assert!(legal_moves(game.board(), Player::White).is_empty());

    game.play(last[0]).unwrap();
    assert!(game.is_over());
    assert_eq!(game.score(), Score { black: 18, white: 0 });
}

#[test]
fn test_winner_counts() {
    let mut rows = "BBBBBBBB\n".repeat(4);
    rows.push_str("BBBWWWWW\n");
    rows.push_str(&"WWWWWWWW\n".repeat(3));
    let b = board(&rows);
    assert!(b.is_full());
    assert_eq!(determine_winner(&b), Outcome::Winner(Player::Black));

    let tie = board(&"BWBWBWBW\n".repeat(8));
    assert_eq!(determine_winner(&tie), Outcome::Tie);

    let white = board(&"WWWWWWWW\n".repeat(8));
    assert_eq!(determine_winner(&white), Outcome::Winner(Player::White));
}

#[test]
fn test_illegal_move_is_atomic() {
    let mut game = replay(&WIPEOUT[..4]);
    let before = game.board().clone();
    let player = game.current_player();

    for point in [(0, 0), (3, 3), (7, 7), (8, 8)] {
        let err = game.play(point).unwrap_err();
        assert!(matches!(
            err,
            GameError::IllegalMove { .. } | GameError::OutOfRange { .. }
        ));
    }
    assert_eq!(game.board(), &before);
    assert_eq!(game.current_player(), player);
    assert_eq!(game.moves_played(), 4);
}

// =============================================================================
// Randomized playouts
// =============================================================================

/// Captures computed the slow way: walk each ray cell by cell with signed
/// arithmetic, independent of the library's scanner.
fn naive_captures(b: &Board, row: usize, col: usize, player: Player) -> BTreeSet<Point> {
    let own = player.cell();
    let theirs = player.opponent().cell();
    let mut out = BTreeSet::new();
    for (dr, dc) in DIRECTIONS {
        let mut run = Vec::new();
        let (mut r, mut c) = (row as isize + dr, col as isize + dc);
        while (0..N as isize).contains(&r) && (0..N as isize).contains(&c) {
            let cell = b.get(r as usize, c as usize).unwrap();
            if cell == theirs {
                run.push((r as usize, c as usize));
            } else {
                if cell == own && !run.is_empty() {
                    out.extend(run.iter().copied());
                }
                break;
            }
            r += dr;
            c += dc;
        }
    }
    out
}

fn check_legality(b: &Board, player: Player) {
    let legal = legal_moves(b, player);
    for (r, c) in Board::points() {
        let empty = b.get(r, c).unwrap() == Cell::Empty;
        let captures = naive_captures(b, r, c, player);
        if legal.contains(&(r, c)) {
            assert!(empty, "legal move on occupied cell ({r}, {c})");
            assert!(!captures.is_empty(), "legal move ({r}, {c}) flips nothing");
            assert_eq!(captures_at(b, r, c, player), captures);
        } else if empty {
            assert!(
                captures.is_empty(),
                "({r}, {c}) captures {captures:?} but is not listed as legal"
            );
        }
    }
    assert_eq!(legal, legal_moves(b, player));
}

fn random_playout(seed: u64) -> Game {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut game = Game::new();

    while let Some(player) = game.current_player() {
        check_legality(game.board(), player);
        check_legality(game.board(), player.opponent());

        let legal: Vec<Point> = game.legal_moves().into_iter().collect();
        assert!(!legal.is_empty(), "awaiting a move with no legal moves");
        let choice = legal[rng.usize(..legal.len())];

        let before = Score::of(game.board());
        let mv = game.play(choice).unwrap();
        let after = Score::of(game.board());

        let flipped = mv.flipped().len();
        match player {
            Player::Black => {
                assert_eq!(after.black, before.black + flipped + 1);
                assert_eq!(after.white, before.white - flipped);
            }
            Player::White => {
                assert_eq!(after.white, before.white + flipped + 1);
                assert_eq!(after.black, before.black - flipped);
            }
        }
    }
    game
}

#[test]
fn test_random_playouts() {
    for seed in 0..40 {
        let game = random_playout(seed);
        let b = game.board();
        match game.status() {
            Status::GameOver(GameOverReason::BoardFull) => assert!(b.is_full()),
            Status::GameOver(GameOverReason::NoMovesForEitherPlayer) => {
                assert!(legal_moves(b, Player::Black).is_empty());
                assert!(legal_moves(b, Player::White).is_empty());
            }
            Status::AwaitingMove(_) => unreachable!("playout stopped early"),
        }
        assert!(game.moves_played() <= 60);
        assert_eq!(game.winner(), Some(determine_winner(b)));
    }
}
