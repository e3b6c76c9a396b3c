//! Keyboard and mouse mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;

use crate::GameMode;
use crate::controller::{Command, Phase};
use crate::games::tictactoe::Position;

use super::ui;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Forward to the session controller.
    Command(Command),
    /// Move the board cursor.
    Cursor(KeyCode),
    /// Mark the cell under the cursor.
    MarkCursor,
    /// Move the menu highlight.
    MenuMove(KeyCode),
    /// Pick the highlighted menu entry.
    MenuConfirm,
    /// Leave the program.
    Quit,
    /// Key has no meaning here.
    Ignore,
}

/// Maps a key press to an action for the given phase.
pub fn map_key(phase: Phase, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }
    if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return Action::Quit;
    }

    match phase {
        Phase::MenuSelect => match key.code {
            KeyCode::Char('1') => Action::Command(Command::ChooseMode(GameMode::PlayerVsPlayer)),
            KeyCode::Char('2') => Action::Command(Command::ChooseMode(GameMode::PlayerVsCpu)),
            KeyCode::Up | KeyCode::Down => Action::MenuMove(key.code),
            KeyCode::Enter => Action::MenuConfirm,
            _ => Action::Ignore,
        },
        Phase::InPlay => match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                Action::Cursor(key.code)
            }
            KeyCode::Enter | KeyCode::Char(' ') => Action::MarkCursor,
            KeyCode::Char(c) => match Position::from_digit(c) {
                Some(pos) => Action::Command(Command::MarkCell(pos.to_index())),
                None => Action::Ignore,
            },
            KeyCode::Esc => Action::Command(Command::ReturnToMenu),
            _ => Action::Ignore,
        },
        Phase::RoundOver => match key.code {
            KeyCode::Enter | KeyCode::Char('r') => Action::Command(Command::Reset),
            KeyCode::Esc => Action::Command(Command::ReturnToMenu),
            _ => Action::Ignore,
        },
    }
}

/// Maps a left click at (`column`, `row`) on a screen of size `screen` to a
/// board command. Clicks outside the grid, or on a screen too small to
/// show it, map to nothing.
pub fn map_click(phase: Phase, screen: Rect, column: u16, row: u16) -> Option<Command> {
    if phase != Phase::InPlay || !ui::fits(screen) {
        return None;
    }
    ui::cell_at(ui::board_area(screen), column, row).map(|pos| Command::MarkCell(pos.to_index()))
}

/// Moves cursor based on arrow keys.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}
