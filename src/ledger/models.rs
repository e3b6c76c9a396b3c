//! Score counters.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::games::tictactoe::{GameOutcome, Mark};

/// Win and draw counters kept across rounds.
///
/// Serialized as `{"winsX": n, "winsO": n, "draws": n}`. Score files written
/// by older builds used `X`, `O` and `Draws`; those keys are still read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct ScoreLedger {
    #[serde(rename = "winsX", alias = "X")]
    wins_x: u32,
    #[serde(rename = "winsO", alias = "O")]
    wins_o: u32,
    #[serde(alias = "Draws")]
    draws: u32,
}

impl ScoreLedger {
    /// Creates a ledger with explicit counts.
    pub fn new(wins_x: u32, wins_o: u32, draws: u32) -> Self {
        Self {
            wins_x,
            wins_o,
            draws,
        }
    }

    /// Wins recorded for `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.wins_x,
            Mark::O => self.wins_o,
        }
    }

    /// Total rounds recorded. Widened so three full counters still fit.
    pub fn total_games(&self) -> u64 {
        u64::from(self.wins_x) + u64::from(self.wins_o) + u64::from(self.draws)
    }

    /// Adds one to the counter matching a finished round.
    ///
    /// Counters saturate at `u32::MAX`. Returns `false` (and changes nothing)
    /// for an outcome still in progress.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: GameOutcome) -> bool {
        match outcome {
            GameOutcome::Win(Mark::X) => self.wins_x = self.wins_x.saturating_add(1),
            GameOutcome::Win(Mark::O) => self.wins_o = self.wins_o.saturating_add(1),
            GameOutcome::Draw => self.draws = self.draws.saturating_add(1),
            GameOutcome::InProgress => return false,
        }
        debug!(
            wins_x = self.wins_x,
            wins_o = self.wins_o,
            draws = self.draws,
            "Ledger updated"
        );
        true
    }
}

impl std::fmt::Display for ScoreLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X:{}  O:{}  Draws:{}",
            self.wins(Mark::X),
            self.wins(Mark::O),
            self.draws
        )
    }
}
