//! Move and move-error types for tic-tac-toe.
//!
//! A [`Move`] is the record of a mark landing on a square; [`MoveError`]
//! covers every way a requested move can be refused.

use serde::{Deserialize, Serialize};

use super::{Mark, Position};

/// A move in tic-tac-toe: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Error that can occur when validating or choosing a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Cell index outside 0-8.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    InvalidCellIndex(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// The opponent was asked to move on a full board.
    #[display("No moves available on a full board")]
    NoMovesAvailable,

    /// The round is already over.
    #[display("Game is already over")]
    GameOver,
}
