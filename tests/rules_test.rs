//! Tests for the rule engine.

use neon_tictactoe::{Board, GameOutcome, Mark, Position, Square, WIN_LINES, evaluate};

/// Builds a board from nine characters (`X`, `O`, anything else empty),
/// ignoring spaces.
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

#[test]
fn test_empty_board_in_progress() {
    assert_eq!(evaluate(&Board::new()), GameOutcome::InProgress);
}

#[test]
fn test_full_board_without_line_is_draw() {
    assert_eq!(evaluate(&board("XOX OXO OXO")), GameOutcome::Draw);
}

#[test]
fn test_every_line_wins_for_either_mark() {
    for line in WIN_LINES {
        for mark in [Mark::X, Mark::O] {
            let mut b = Board::new();
            for pos in line.positions() {
                b.set(pos, Square::Occupied(mark));
            }
            assert_eq!(evaluate(&b), GameOutcome::Win(mark), "line {:?}", line);
        }
    }
}

#[test]
fn test_win_on_last_square_beats_draw() {
    // Full board, X completes the bottom row.
    assert_eq!(evaluate(&board("XOX OOX XXX")), GameOutcome::Win(Mark::X));
}

#[test]
fn test_mixed_line_is_not_a_win() {
    assert_eq!(evaluate(&board("XXO ___ ___")), GameOutcome::InProgress);
}

#[test]
fn test_evaluate_is_pure() {
    let b = board("X_O _X_ __O");
    let before = b;
    assert_eq!(evaluate(&b), evaluate(&b));
    assert_eq!(b, before);
    assert_eq!(b.get(Position::Center), Square::Occupied(Mark::X));
}
