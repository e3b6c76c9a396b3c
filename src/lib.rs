//! Neon Tic-Tac-Toe library - terminal tic-tac-toe with a persistent scoreboard
//!
//! # Architecture
//!
//! - **Games**: board types, the rule engine and the CPU opponent
//! - **Session**: one round of play
//! - **Controller**: menu / play / round-over state machine
//! - **Ledger**: win and draw counters persisted as JSON
//! - **TUI**: ratatui front end with particles and bell cues
//!
//! # Example
//!
//! ```
//! use neon_tictactoe::{Command, GameMode, MemoryStore, ScoreKeeper, SessionController};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut controller = SessionController::new(
//!     ScoreKeeper::open(MemoryStore::new()),
//!     StdRng::seed_from_u64(7),
//! );
//! controller.handle(Command::ChooseMode(GameMode::PlayerVsPlayer));
//! for cell in [0, 3, 1, 4, 2] {
//!     controller.handle(Command::MarkCell(cell));
//! }
//! assert_eq!(*controller.ledger().wins_x(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod controller;
mod games;
mod ledger;
mod mode;
mod session;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Session control
pub use controller::{
    Command, Cue, EffectStatus, Effects, NoEffects, Phase, SessionController, Transition,
};

// Crate-level exports - Score ledger
pub use ledger::{
    JsonFileStore, LedgerError, LedgerStore, MemoryStore, Persistence, ScoreKeeper, ScoreLedger,
};

// Crate-level exports - Modes and rounds
pub use mode::GameMode;
pub use session::Session;

// Crate-level exports - Terminal front end
pub use tui::{
    Action, App, BURST_SIZE, Particle, ParticleField, board_area, cell_at, cell_rects, map_click,
    map_key, move_cursor, run_tui,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, GameOutcome, Mark, Move, MoveError, Position, Square, WIN_LINES, WinLine, check_winner,
    choose_move, evaluate, is_draw, is_full, winning_line,
};
