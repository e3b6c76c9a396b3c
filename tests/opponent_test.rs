//! Tests for the CPU opponent heuristic.

use neon_tictactoe::{Board, Mark, MoveError, Position, Square, choose_move};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn board(cells: &str) -> Board {
    let mut squares = [Square::Empty; 9];
    for (i, c) in cells.chars().filter(|c| !c.is_whitespace()).enumerate() {
        squares[i] = match c {
            'X' => Square::Occupied(Mark::X),
            'O' => Square::Occupied(Mark::O),
            _ => Square::Empty,
        };
    }
    Board::from_squares(squares)
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(0xC0FFEE)
}

#[test]
fn test_takes_the_win() {
    let b = board("XX_ _O_ __O");
    assert_eq!(
        choose_move(&b, Mark::X, Mark::O, &mut rng()),
        Ok(Position::TopRight)
    );
}

#[test]
fn test_win_beats_block() {
    // O can win at 2; X threatens 5. Winning comes first.
    let b = board("OO_ XX_ ___");
    assert_eq!(
        choose_move(&b, Mark::O, Mark::X, &mut rng()),
        Ok(Position::TopRight)
    );
}

#[test]
fn test_blocks_opponent() {
    let b = board("X__ _X_ ___");
    assert_eq!(
        choose_move(&b, Mark::O, Mark::X, &mut rng()),
        Ok(Position::BottomRight)
    );
}

#[test]
fn test_full_board_has_no_moves() {
    let b = board("XOX OXO OXO");
    assert_eq!(
        choose_move(&b, Mark::O, Mark::X, &mut rng()),
        Err(MoveError::NoMovesAvailable)
    );
}

#[test]
fn test_random_fallback_picks_empty_squares() {
    let b = board("X__ ___ ___");
    let mut rng = rng();
    for _ in 0..200 {
        let pos = choose_move(&b, Mark::O, Mark::X, &mut rng).unwrap();
        assert!(b.is_empty(pos), "{} is occupied", pos);
    }
}

#[test]
fn test_same_seed_same_choice() {
    let b = Board::new();
    let first = choose_move(&b, Mark::X, Mark::O, &mut rng()).unwrap();
    let second = choose_move(&b, Mark::X, Mark::O, &mut rng()).unwrap();
    assert_eq!(first, second);
}
