//! Win detection logic for tic-tac-toe.

use tracing::instrument;

use super::super::{Board, Mark, Position, Square};

/// One of the eight lines that wins when a single mark fills it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinLine([Position; 3]);

impl WinLine {
    /// The three positions of this line, in increasing index order.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Returns true if `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// The mark filling all three squares, if any.
    pub fn owner(&self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.0;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            sq.mark()
        } else {
            None
        }
    }
}

/// Every winning line, in scan order: rows, columns, diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinLine([
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ]),
    WinLine([
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ]),
    // Columns
    WinLine([
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ]),
    WinLine([
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ]),
    WinLine([
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ]),
    // Diagonals
    WinLine([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinLine([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Returns the first uniformly occupied line in scan order.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<WinLine> {
    WIN_LINES
        .iter()
        .copied()
        .find(|line| line.owner(board).is_some())
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a mark has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).and_then(|line| line.owner(board))
}
