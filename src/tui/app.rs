//! Application state and logic.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

use crate::GameMode;
use crate::controller::{Command, Phase, SessionController, Transition};
use crate::games::tictactoe::Position;
use crate::ledger::LedgerStore;

use super::input::{self, Action};
use super::particles::ParticleField;

/// Main application state: the session controller plus everything only the
/// terminal needs (cursor, menu highlight, CPU timer).
#[derive(Debug)]
pub struct App<S: LedgerStore> {
    controller: SessionController<S, ParticleField>,
    cursor: Position,
    menu_index: usize,
    cpu_delay: Duration,
    cpu_due: Option<Instant>,
    should_quit: bool,
}

impl<S: LedgerStore> App<S> {
    /// Creates a new application.
    pub fn new(controller: SessionController<S, ParticleField>, cpu_delay: Duration) -> Self {
        Self {
            controller,
            cursor: Position::Center,
            menu_index: 0,
            cpu_delay,
            cpu_due: None,
            should_quit: false,
        }
    }

    /// The session controller.
    pub fn controller(&self) -> &SessionController<S, ParticleField> {
        &self.controller
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Highlighted menu entry.
    pub fn selected_mode(&self) -> GameMode {
        GameMode::iter().nth(self.menu_index).unwrap_or_default()
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// True while the CPU's move is scheduled.
    pub fn cpu_thinking(&self) -> bool {
        self.cpu_due.is_some()
    }

    /// Status line under the board.
    pub fn status(&self) -> String {
        match self.controller.session() {
            Some(session) if session.outcome().is_over() => session.outcome().to_string(),
            Some(session) => format!("{}'s Turn", session.to_move()),
            None => String::new(),
        }
    }

    /// Handles a key press.
    #[instrument(skip(self, now))]
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<Transition> {
        match input::map_key(self.controller.phase(), key) {
            Action::Quit => {
                info!("Quit requested");
                self.should_quit = true;
                None
            }
            Action::Command(command) => Some(self.dispatch(command, now)),
            Action::Cursor(code) => {
                self.cursor = input::move_cursor(self.cursor, code);
                None
            }
            Action::MarkCursor => Some(self.dispatch(Command::MarkCell(self.cursor.to_index()), now)),
            Action::MenuMove(code) => {
                self.move_menu(code);
                None
            }
            Action::MenuConfirm => {
                Some(self.dispatch(Command::ChooseMode(self.selected_mode()), now))
            }
            Action::Ignore => None,
        }
    }

    /// Handles a left click on a screen of size `screen`.
    pub fn handle_click(
        &mut self,
        screen: Rect,
        column: u16,
        row: u16,
        now: Instant,
    ) -> Option<Transition> {
        let command = input::map_click(self.controller.phase(), screen, column, row)?;
        if let Command::MarkCell(index) = command
            && let Some(pos) = Position::from_index(index)
        {
            self.cursor = pos;
        }
        Some(self.dispatch(command, now))
    }

    /// Sends a command to the controller and keeps the CPU timer in step.
    pub fn dispatch(&mut self, command: Command, now: Instant) -> Transition {
        let transition = self.controller.handle(command);
        match transition {
            Transition::Started(_) => {
                self.cursor = Position::Center;
                self.controller.effects_mut().clear();
            }
            Transition::Menu => self.controller.effects_mut().clear(),
            _ => {}
        }
        self.schedule_cpu(now);
        transition
    }

    /// Advances animations and lets the CPU move once its delay has passed.
    pub fn tick(&mut self, now: Instant) -> Option<Transition> {
        self.controller.effects_mut().tick();
        let due = self.cpu_due?;
        if now < due {
            return None;
        }
        self.cpu_due = None;
        let transition = self.controller.play_machine_turn();
        debug!(?transition, "CPU turn played");
        self.schedule_cpu(now);
        Some(transition)
    }

    /// Returns and clears the bells owed to the terminal.
    pub fn take_bells(&mut self) -> usize {
        self.controller.effects_mut().take_bells()
    }

    fn schedule_cpu(&mut self, now: Instant) {
        if !self.controller.machine_turn_pending() {
            self.cpu_due = None;
        } else if self.cpu_due.is_none() {
            self.cpu_due = Some(now + self.cpu_delay);
        }
    }

    fn move_menu(&mut self, code: KeyCode) {
        let count = GameMode::iter().count();
        self.menu_index = match code {
            KeyCode::Up => (self.menu_index + count - 1) % count,
            KeyCode::Down => (self.menu_index + 1) % count,
            _ => self.menu_index,
        };
    }

    pub(crate) fn phase(&self) -> Phase {
        self.controller.phase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{MemoryStore, ScoreKeeper};
    use crossterm::event::KeyModifiers;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn app(delay_ms: u64) -> App<MemoryStore> {
        let controller = SessionController::new(
            ScoreKeeper::open(MemoryStore::new()),
            StdRng::seed_from_u64(5),
        )
        .with_effects(ParticleField::seeded(false, 5));
        App::new(controller, Duration::from_millis(delay_ms))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_menu_enter_starts_highlighted_mode() {
        let mut app = app(0);
        let now = Instant::now();
        app.handle_key(press(KeyCode::Down), now);
        assert_eq!(app.selected_mode(), GameMode::PlayerVsCpu);
        app.handle_key(press(KeyCode::Enter), now);
        assert_eq!(app.phase(), Phase::InPlay);
        assert_eq!(app.controller().mode(), GameMode::PlayerVsCpu);
        assert_eq!(app.status(), "X's Turn");
    }

    #[test]
    fn test_cpu_waits_for_delay() {
        let mut app = app(500);
        let start = Instant::now();
        app.dispatch(Command::ChooseMode(GameMode::PlayerVsCpu), start);
        app.dispatch(Command::MarkCell(4), start);
        assert!(app.cpu_thinking());

        assert_eq!(app.tick(start + Duration::from_millis(100)), None);
        let played = app.tick(start + Duration::from_millis(600));
        assert!(matches!(played, Some(Transition::Placed(_))));
        assert!(!app.cpu_thinking());
        assert_eq!(app.status(), "X's Turn");
    }

    #[test]
    fn test_keys_ignored_while_cpu_thinking() {
        let mut app = app(500);
        let now = Instant::now();
        app.dispatch(Command::ChooseMode(GameMode::PlayerVsCpu), now);
        app.dispatch(Command::MarkCell(0), now);
        assert_eq!(
            app.handle_key(press(KeyCode::Char('5')), now),
            Some(Transition::Stay)
        );
    }

    #[test]
    fn test_q_quits() {
        let mut app = app(0);
        app.handle_key(press(KeyCode::Char('q')), Instant::now());
        assert!(app.should_quit());
    }
}
