//! Terminal UI for Neon Tic-Tac-Toe

mod app;
mod input;
mod particles;
mod ui;

pub use app::App;
pub use input::{Action, map_click, map_key, move_cursor};
pub use particles::{BURST_SIZE, Particle, ParticleField};
pub use ui::{board_area, cell_at, cell_rects};

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use tracing::{error, info, instrument};

use crate::GameMode;
use crate::config::GameConfig;
use crate::controller::{Command, SessionController};
use crate::ledger::{JsonFileStore, LedgerStore, ScoreKeeper};

/// Runs the terminal game until the user quits.
///
/// Logs go to the configured log file so they do not tear the screen. With
/// `start_mode` set the menu is skipped.
pub async fn run_tui(config: GameConfig, start_mode: Option<GameMode>) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(scores = %config.scores_path().display(), "Starting Neon Tic-Tac-Toe");

    let seed = *config.seed();
    let scores = ScoreKeeper::open(JsonFileStore::new(config.scores_path()));
    let controller = SessionController::new(scores, rng_from(seed)).with_effects(
        ParticleField::new(*config.bell(), rng_from(seed.map(|s| s.wrapping_add(1)))),
    );
    let mut app = App::new(controller, Duration::from_millis(*config.cpu_delay_ms()));
    if let Some(mode) = start_mode.or(*config.default_mode()) {
        app.dispatch(Command::ChooseMode(mode), Instant::now());
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(ledger = %app.controller().ledger(), "Exiting");
    res
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Draw, read input, advance timers; repeat until quit.
#[instrument(skip_all)]
async fn run_app<S: LedgerStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<S>,
) -> Result<()> {
    use tokio::time::sleep;

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                // Skip key release events (crossterm fires both press and release).
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    app.handle_key(key, Instant::now());
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    let (width, height) = crossterm::terminal::size()?;
                    app.handle_click(
                        Rect::new(0, 0, width, height),
                        mouse.column,
                        mouse.row,
                        Instant::now(),
                    );
                }
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }

        app.tick(Instant::now());

        let bells = app.take_bells();
        if bells > 0 {
            let out = terminal.backend_mut();
            for _ in 0..bells {
                out.write_all(b"\x07")?;
            }
            out.flush()?;
        }

        sleep(Duration::from_millis(10)).await;
    }
}
