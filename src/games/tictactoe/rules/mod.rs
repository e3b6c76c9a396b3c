//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the session, the opponent and the tests can all share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_LINES, WinLine, check_winner, winning_line};

use tracing::instrument;

use super::{Board, GameOutcome};

/// Evaluates a board.
///
/// The first uniformly occupied line in scan order wins; otherwise a full
/// board is a draw and anything else is still in progress. Mark counts are
/// not validated.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some(mark) = check_winner(board) {
        GameOutcome::Win(mark)
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
