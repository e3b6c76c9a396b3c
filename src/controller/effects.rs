//! Cosmetic side effects triggered by the controller.

use crate::games::tictactoe::{Mark, WinLine};

/// Sound cue requested by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// A mark landed on the board.
    Click,
    /// A round was won.
    Win,
}

/// Whether an effect actually happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectStatus {
    /// The effect ran.
    Played,
    /// No output device or asset for it; silently skipped.
    Unavailable,
}

/// Receives cosmetic events. Every method has a do-nothing default, and
/// none can fail: missing assets answer [`EffectStatus::Unavailable`].
pub trait Effects {
    /// Plays a sound cue.
    fn play(&mut self, _cue: Cue) -> EffectStatus {
        EffectStatus::Unavailable
    }

    /// Starts the win animation for `mark` along `line`.
    fn celebrate(&mut self, _mark: Mark, _line: WinLine) -> EffectStatus {
        EffectStatus::Unavailable
    }
}

/// Effects sink with no output at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEffects;

impl Effects for NoEffects {}
