//! Draw detection logic for tic-tac-toe.

use tracing::instrument;

use super::super::{Board, Square};
use super::win::check_winner;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks for a full board with no completed line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::Mark;
    use super::*;

    fn board(marks: &str) -> Board {
        let mut squares = [Square::Empty; 9];
        for (square, c) in squares.iter_mut().zip(marks.chars().filter(|c| !c.is_whitespace())) {
            *square = match c {
                'X' => Square::Occupied(Mark::X),
                'O' => Square::Occupied(Mark::O),
                _ => Square::Empty,
            };
        }
        Board::from_squares(squares)
    }

    #[test]
    fn test_one_empty_square_is_not_full() {
        let b = board("XOX OXO OX_");
        assert!(!is_full(&b));
        assert!(!is_draw(&b));
    }

    #[test]
    fn test_alternating_full_board_is_draw() {
        // X O X / O X O / O X O: no line is uniform.
        let b = board("XOX OXO OXO");
        assert!(is_full(&b));
        assert!(is_draw(&b));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        // O completes the right column on the last square.
        let b = board("XXO XOO OXO");
        assert!(is_full(&b));
        assert!(!is_draw(&b));
    }
}
