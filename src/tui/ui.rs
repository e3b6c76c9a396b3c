//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use strum::IntoEnumIterator;

use crate::GameMode;
use crate::controller::Phase;
use crate::games::tictactoe::{Board, Mark, Position, Square};
use crate::ledger::{LedgerStore, Persistence};

use super::app::App;
use super::particles::ParticleField;

const NEON_ORANGE: Color = Color::Rgb(255, 140, 0);
const GLOW: Color = Color::Rgb(255, 80, 200);

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
// Title, scores, status and help rows around the board.
const MARGIN_HEIGHT: u16 = 8;

/// Renders the current phase.
pub fn draw<S: LedgerStore>(frame: &mut Frame, app: &App<S>) {
    match app.phase() {
        Phase::MenuSelect => draw_menu(frame, app.selected_mode()),
        Phase::InPlay | Phase::RoundOver => draw_game(frame, app),
    }
}

fn draw_menu(frame: &mut Frame, selected: GameMode) {
    let area = center_rect(frame.area(), 30, 9);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let title = Paragraph::new("Neon Tic-Tac-Toe")
        .style(Style::default().fg(NEON_ORANGE).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let mut items: Vec<ListItem> = GameMode::iter()
        .enumerate()
        .map(|(i, mode)| {
            let style = if mode == selected {
                Style::default().fg(Color::Black).bg(Color::White)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("{}. {}", i + 1, mode.name())).style(style)
        })
        .collect();
    items.push(ListItem::new("Q. Quit").style(Style::default().fg(Color::White)));
    frame.render_widget(List::new(items), chunks[1]);
}

fn draw_game<S: LedgerStore>(frame: &mut Frame, app: &App<S>) {
    let screen = frame.area();
    if !fits(screen) {
        frame.render_widget(
            Paragraph::new("Terminal too small").alignment(Alignment::Center),
            screen,
        );
        return;
    }
    let chunks = layout(screen);

    let title = Paragraph::new(format!("Neon Tic-Tac-Toe - {}", app.controller().mode()))
        .style(Style::default().fg(NEON_ORANGE).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let ledger = app.controller().ledger();
    let mut score = vec![Span::styled(
        ledger.to_string(),
        Style::default().fg(Color::White),
    )];
    if app.controller().scores().persistence() == Persistence::Disabled {
        score.push(Span::styled(
            "  (not saved)",
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(score)).alignment(Alignment::Center),
        chunks[1],
    );

    let board_area = board_area(screen);
    if let Some(session) = app.controller().session() {
        let cursor = (app.phase() == Phase::InPlay).then_some(app.cursor());
        draw_board(frame, board_area, session.board(), cursor);
    }
    draw_particles(frame, board_area, app.controller().effects());

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = match app.phase() {
        Phase::RoundOver => "Enter: play again   Esc: menu   q: quit",
        _ => "Arrows + Enter or 1-9 or click: place   Esc: menu   q: quit",
    };
    frame.render_widget(
        Paragraph::new(help)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        chunks[4],
    );
}

fn layout(screen: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Length(1),            // Scores
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Status
            Constraint::Length(1),            // Help
        ])
        .split(screen)
}

/// True if the game screen can be drawn in full on `screen`.
pub fn fits(screen: Rect) -> bool {
    screen.width >= BOARD_WIDTH && screen.height >= BOARD_HEIGHT + MARGIN_HEIGHT
}

/// Area of the 3x3 grid on a screen of the given size.
pub fn board_area(screen: Rect) -> Rect {
    center_rect(layout(screen)[2], BOARD_WIDTH, BOARD_HEIGHT)
}

/// Rectangles of the nine cells, in row-major order.
pub fn cell_rects(board: Rect) -> [Rect; 9] {
    Position::ALL.map(|pos| {
        Rect::new(
            board.x + pos.col() as u16 * (CELL_WIDTH + 1),
            board.y + pos.row() as u16 * (CELL_HEIGHT + 1),
            CELL_WIDTH,
            CELL_HEIGHT,
        )
    })
}

/// Cell under the screen point, if any. Grid lines belong to no cell.
pub fn cell_at(board: Rect, column: u16, row: u16) -> Option<Position> {
    Position::ALL
        .into_iter()
        .zip(cell_rects(board))
        .find(|(_, rect)| {
            column >= rect.x
                && column < rect.x + rect.width
                && row >= rect.y
                && row < rect.y + rect.height
        })
        .map(|(pos, _)| pos)
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Option<Position>) {
    let grid = Style::default().fg(GLOW);
    for i in 1..3u16 {
        let y = area.y + i * (CELL_HEIGHT + 1) - 1;
        let line = Rect::new(area.x, y, area.width, 1);
        frame.render_widget(Paragraph::new("━".repeat(area.width as usize)).style(grid), line);
    }
    for i in 1..3u16 {
        let x = area.x + i * (CELL_WIDTH + 1) - 1;
        for row in 0..3u16 {
            let y = area.y + row * (CELL_HEIGHT + 1);
            let line = Rect::new(x, y, 1, CELL_HEIGHT);
            frame.render_widget(Paragraph::new("┃\n┃\n┃").style(grid), line);
        }
    }

    for (pos, rect) in Position::ALL.into_iter().zip(cell_rects(area)) {
        draw_cell(frame, rect, board.get(pos), cursor == Some(pos));
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, square: Square, highlighted: bool) {
    let (symbol, base_style) = match square {
        Square::Empty => ("", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Mark::X) => (
            "X",
            Style::default().fg(NEON_ORANGE).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            "O",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if highlighted {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically centre the symbol in the cell.
    let text = vec![Line::default(), Line::from(Span::styled(symbol, style))];
    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_particles(frame: &mut Frame, board: Rect, field: &ParticleField) {
    let style = Style::default().fg(NEON_ORANGE);
    let buffer = frame.buffer_mut();
    for p in field.particles() {
        let x = board.x as f32 + p.x * board.width as f32;
        let y = board.y as f32 + p.y * board.height as f32;
        if x < 0.0 || y < 0.0 {
            continue;
        }
        if let Some(cell) = buffer.cell_mut((x as u16, y as u16)) {
            cell.set_symbol(p.glyph()).set_style(style);
        }
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_do_not_overlap_grid_lines() {
        let board = Rect::new(10, 5, BOARD_WIDTH, BOARD_HEIGHT);
        let cells = cell_rects(board);
        assert_eq!(cells[0], Rect::new(10, 5, CELL_WIDTH, CELL_HEIGHT));
        assert_eq!(cells[8].x + cells[8].width, board.x + board.width);
        assert_eq!(cells[8].y + cells[8].height, board.y + board.height);
        // Grid line between the first two columns.
        assert_eq!(cell_at(board, 10 + CELL_WIDTH, 6), None);
    }

    #[test]
    fn test_fits_minimum_screen() {
        assert!(fits(Rect::new(0, 0, BOARD_WIDTH, BOARD_HEIGHT + MARGIN_HEIGHT)));
        assert!(!fits(Rect::new(0, 0, BOARD_WIDTH - 1, 40)));
        assert!(!fits(Rect::new(0, 0, 80, BOARD_HEIGHT + MARGIN_HEIGHT - 1)));
    }

    #[test]
    fn test_cell_at_maps_every_cell() {
        let board = board_area(Rect::new(0, 0, 80, 30));
        for (pos, rect) in Position::ALL.into_iter().zip(cell_rects(board)) {
            assert_eq!(cell_at(board, rect.x, rect.y), Some(pos));
        }
    }
}
