//! Persisted win/draw counters.

mod error;
mod models;
mod service;
mod store;

pub use error::LedgerError;
pub use models::ScoreLedger;
pub use service::{Persistence, ScoreKeeper};
pub use store::{JsonFileStore, LedgerStore, MemoryStore};
