//! Score keeping business logic layer.

use tracing::{debug, info, instrument, warn};

use crate::games::tictactoe::GameOutcome;
use crate::ledger::{LedgerError, LedgerStore, ScoreLedger};

/// Whether ledger changes are written back to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    /// Saves go to the store.
    Enabled,
    /// The store could not be read at startup; the ledger lives in memory only.
    Disabled,
}

/// Service layer owning the in-memory ledger and its store.
///
/// Storage failures never escape: an unreadable store starts the ledger at
/// zero with persistence disabled, and a failed save is logged and skipped.
#[derive(Debug)]
pub struct ScoreKeeper<S: LedgerStore> {
    store: S,
    ledger: ScoreLedger,
    persistence: Persistence,
}

impl<S: LedgerStore> ScoreKeeper<S> {
    /// Loads the ledger from `store`.
    #[instrument(skip(store))]
    pub fn open(store: S) -> Self {
        let (ledger, persistence) = match store.load() {
            Ok(Some(ledger)) => (ledger, Persistence::Enabled),
            Ok(None) => {
                info!("No saved scores, starting from zero");
                (ScoreLedger::default(), Persistence::Enabled)
            }
            Err(e) => {
                warn!(error = %e, "Scores unavailable, keeping them in memory for this session");
                (ScoreLedger::default(), Persistence::Disabled)
            }
        };
        Self {
            store,
            ledger,
            persistence,
        }
    }

    /// Current counters.
    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    /// Whether changes reach the store.
    pub fn persistence(&self) -> Persistence {
        self.persistence
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Counts a finished round and saves the ledger.
    ///
    /// A failed save is logged once and turns persistence off for the rest
    /// of the session; the in-memory count still advances. Returns `false`
    /// for an outcome that is still in progress.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: GameOutcome) -> bool {
        if !self.ledger.record(outcome) {
            return false;
        }
        if let Err(e) = self.persist() {
            warn!(error = %e, "Failed to save scores, keeping them in memory for this session");
            self.persistence = Persistence::Disabled;
        }
        true
    }

    /// Zeroes every counter and saves the result.
    ///
    /// The store is overwritten even if it was unreadable at startup, which
    /// turns persistence back on. Unlike [`record`](Self::record) a failed
    /// save is returned to the caller.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<(), LedgerError> {
        info!("Resetting scores");
        self.ledger = ScoreLedger::default();
        self.persistence = Persistence::Enabled;
        self.persist()
    }

    fn persist(&mut self) -> Result<(), LedgerError> {
        match self.persistence {
            Persistence::Enabled => self.store.save(&self.ledger),
            Persistence::Disabled => {
                debug!("Persistence disabled, skipping save");
                Ok(())
            }
        }
    }
}
