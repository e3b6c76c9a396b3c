//! Neon Tic-Tac-Toe - unified CLI
//!
//! Plays in the terminal by default; `scores` and `reset-scores` manage the
//! scoreboard without opening the UI.

#![warn(missing_docs)]

mod cli;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use neon_tictactoe::{GameConfig, GameMode, JsonFileStore, Persistence, ScoreKeeper};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config '{}'", cli.config.display()))?;

    match cli.command.unwrap_or_default() {
        Command::Play { scores, seed, mode } => run_play(config, scores, seed, mode).await,
        Command::Scores { scores } => {
            init_stderr_logging();
            show_scores(&config, scores)
        }
        Command::ResetScores { scores } => {
            init_stderr_logging();
            reset_scores(&config, scores)
        }
    }
}

/// Logging for the non-interactive commands. Quiet unless `RUST_LOG` says
/// otherwise, so the scoreboard is the only output.
fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the terminal game
async fn run_play(
    mut config: GameConfig,
    scores: Option<PathBuf>,
    seed: Option<u64>,
    mode: Option<GameMode>,
) -> Result<()> {
    if let Some(path) = scores {
        config = config.with_scores_path(path);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    neon_tictactoe::run_tui(config, mode).await
}

fn score_keeper(config: &GameConfig, scores: Option<PathBuf>) -> ScoreKeeper<JsonFileStore> {
    let path = scores.unwrap_or_else(|| config.scores_path().clone());
    ScoreKeeper::open(JsonFileStore::new(path))
}

/// Print the scoreboard
#[instrument(skip(config))]
fn show_scores(config: &GameConfig, scores: Option<PathBuf>) -> Result<()> {
    let keeper = score_keeper(config, scores);
    let ledger = keeper.ledger();
    println!("{}", ledger);
    println!("Games played: {}", ledger.total_games());
    if keeper.persistence() == Persistence::Disabled {
        warn!(path = %keeper.store().path().display(), "Score file unreadable");
        println!("(score file unreadable, showing zeros)");
    }
    Ok(())
}

/// Zero the scoreboard
#[instrument(skip(config))]
fn reset_scores(config: &GameConfig, scores: Option<PathBuf>) -> Result<()> {
    let mut keeper = score_keeper(config, scores);
    if keeper.persistence() == Persistence::Disabled {
        warn!(path = %keeper.store().path().display(), "Overwriting unreadable score file");
    }
    keeper.reset().context("Failed to reset scores")?;
    info!(path = %keeper.store().path().display(), "Scores reset");
    println!("Scores reset.");
    Ok(())
}
