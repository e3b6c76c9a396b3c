//! Tic-tac-toe: board, rules and the CPU opponent.

mod action;
mod opponent;
mod position;
mod rules;
mod types;

pub use action::{Move, MoveError};
pub use opponent::choose_move;
pub use position::Position;
pub use rules::{
    WIN_LINES, WinLine, check_winner, evaluate, is_draw, is_full, winning_line,
};
pub use types::{Board, GameOutcome, Mark, Square};
