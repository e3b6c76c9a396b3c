//! Commands accepted by the session controller and the transitions they cause.

use crate::GameMode;
use crate::games::tictactoe::{GameOutcome, Move, MoveError};

/// Where the controller is in its menu/play/round-over cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a mode to be chosen.
    MenuSelect,
    /// A round is being played.
    InPlay,
    /// The round has ended; waiting for reset or menu.
    RoundOver,
}

/// Input from the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start a round in the given mode (menu only).
    ChooseMode(GameMode),
    /// Place the current mark on cell `n` (0-8, row-major).
    MarkCell(usize),
    /// Start a fresh round in the same mode (round over only).
    Reset,
    /// Abandon the round and go back to the menu.
    ReturnToMenu,
}

/// The result of handling a [`Command`] or a machine turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed; the command does not apply in this phase.
    Stay,
    /// Input was refused; nothing changed.
    Rejected(MoveError),
    /// A fresh round started.
    Started(GameMode),
    /// A mark was placed and the round goes on.
    Placed(Move),
    /// A mark was placed and ended the round.
    RoundOver {
        /// The move that ended it.
        last_move: Move,
        /// Win or draw.
        outcome: GameOutcome,
    },
    /// Back at the menu.
    Menu,
}

impl Transition {
    /// True if the command changed any state.
    pub fn changed_state(&self) -> bool {
        !matches!(self, Transition::Stay | Transition::Rejected(_))
    }

    /// The move made, if any.
    pub fn placed_move(&self) -> Option<Move> {
        match self {
            Transition::Placed(mv) | Transition::RoundOver { last_move: mv, .. } => Some(*mv),
            _ => None,
        }
    }

    /// The input error, if the command was refused.
    pub fn rejection(&self) -> Option<MoveError> {
        match self {
            Transition::Rejected(e) => Some(*e),
            _ => None,
        }
    }
}
