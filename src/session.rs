//! A single round of tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::GameMode;
use crate::games::tictactoe::{Board, GameOutcome, Mark, Move, MoveError, Position, Square, evaluate};

/// One round: the board, whose turn it is, and the mode it is played in.
///
/// The outcome is recomputed from the board on every query so the two can
/// never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    board: Board,
    to_move: Mark,
    mode: GameMode,
}

impl Session {
    /// Creates a fresh round: empty board, X to move.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        debug!(mode = %mode, "Starting new session");
        Self {
            board: Board::new(),
            to_move: Mark::X,
            mode,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark that plays next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Mode this round is played in.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Current outcome, derived from the board.
    pub fn outcome(&self) -> GameOutcome {
        evaluate(&self.board)
    }

    /// True when the CPU owns the mark to move and the round is still open.
    pub fn is_machine_turn(&self) -> bool {
        self.mode.machine_mark() == Some(self.to_move) && !self.outcome().is_over()
    }

    /// Places the current mark at `pos`.
    ///
    /// The mover only switches while the round stays in progress, so after a
    /// win `to_move` still names the winner.
    #[instrument(skip(self), fields(mark = %self.to_move))]
    pub fn place(&mut self, pos: Position) -> Result<(Move, GameOutcome), MoveError> {
        if self.outcome().is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }

        let mv = Move::new(self.to_move, pos);
        self.board.set(pos, Square::Occupied(self.to_move));

        let outcome = self.outcome();
        if !outcome.is_over() {
            self.to_move = self.to_move.opponent();
        }
        debug!(%mv, %outcome, "Mark placed");
        Ok((mv, outcome))
    }
}
