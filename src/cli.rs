//! Command-line interface for neon_tictactoe.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use neon_tictactoe::GameMode;

/// Neon Tic-Tac-Toe - terminal tic-tac-toe with a persistent scoreboard
#[derive(Parser, Debug)]
#[command(name = "neon_tictactoe")]
#[command(about = "Terminal tic-tac-toe against a friend or the CPU", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults)
    #[arg(short, long, global = true, default_value = "neon_tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Score file, overriding the config
        #[arg(long)]
        scores: Option<PathBuf>,

        /// Seed for the CPU's random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Skip the menu and start in this mode
        #[arg(long, value_enum)]
        mode: Option<GameMode>,
    },

    /// Print the scoreboard and exit
    Scores {
        /// Score file, overriding the config
        #[arg(long)]
        scores: Option<PathBuf>,
    },

    /// Zero the scoreboard
    ResetScores {
        /// Score file, overriding the config
        #[arg(long)]
        scores: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            scores: None,
            seed: None,
            mode: None,
        }
    }
}
