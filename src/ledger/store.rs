//! Storage backends for the score ledger.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::ledger::{LedgerError, ScoreLedger};

/// Somewhere a [`ScoreLedger`] can be read from and written to.
pub trait LedgerStore {
    /// Reads the stored ledger. `Ok(None)` means nothing has been stored yet.
    fn load(&self) -> Result<Option<ScoreLedger>, LedgerError>;

    /// Replaces the stored ledger.
    fn save(&mut self, ledger: &ScoreLedger) -> Result<(), LedgerError>;
}

/// JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the file at `path`. Nothing is touched until
    /// the first load or save.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        debug!("Creating JsonFileStore");
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerStore for JsonFileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Option<ScoreLedger>, LedgerError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Score file not found");
                return Ok(None);
            }
            Err(e) => {
                return Err(LedgerError::new(format!(
                    "Failed to read '{}': {}",
                    self.path.display(),
                    e
                )));
            }
        };

        let ledger: ScoreLedger = serde_json::from_str(&content).map_err(|e| {
            LedgerError::new(format!("Failed to parse '{}': {}", self.path.display(), e))
        })?;
        info!(%ledger, "Scores loaded");
        Ok(Some(ledger))
    }

    #[instrument(skip(self, ledger), fields(path = %self.path.display()))]
    fn save(&mut self, ledger: &ScoreLedger) -> Result<(), LedgerError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string(ledger)?;
        std::fs::write(&self.path, content).map_err(|e| {
            LedgerError::new(format!("Failed to write '{}': {}", self.path.display(), e))
        })?;
        debug!(%ledger, "Scores saved");
        Ok(())
    }
}

/// Keeps the ledger in memory only. Useful for tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    stored: Option<ScoreLedger>,
    saves: usize,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `ledger`.
    pub fn with_ledger(ledger: ScoreLedger) -> Self {
        Self {
            stored: Some(ledger),
            saves: 0,
        }
    }

    /// The last ledger saved (or seeded).
    pub fn stored(&self) -> Option<ScoreLedger> {
        self.stored
    }

    /// How many times [`LedgerStore::save`] has been called.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl LedgerStore for MemoryStore {
    fn load(&self) -> Result<Option<ScoreLedger>, LedgerError> {
        Ok(self.stored)
    }

    fn save(&mut self, ledger: &ScoreLedger) -> Result<(), LedgerError> {
        self.stored = Some(*ledger);
        self.saves += 1;
        Ok(())
    }
}
