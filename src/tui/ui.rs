//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::app::{App, Focus};
use crate::{CellView, GameView, Position, Square, StatusLine};

const CELL_WIDTH: u16 = 11;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
const HISTORY_WIDTH: u16 = 30;

/// Screen areas of the clickable elements in the last frame.
#[derive(Debug, Clone, Default)]
pub(crate) struct HitMap {
    pub(crate) cells: Vec<(Rect, Position)>,
    /// Move list rows, by index into the displayed move list.
    pub(crate) moves: Vec<(Rect, usize)>,
    pub(crate) sort_toggle: Option<Rect>,
}

impl HitMap {
    pub(crate) fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        self.cells
            .iter()
            .find(|(rect, _)| hit(*rect, column, row))
            .map(|(_, pos)| *pos)
    }

    pub(crate) fn move_row_at(&self, column: u16, row: u16) -> Option<usize> {
        self.moves
            .iter()
            .find(|(rect, _)| hit(*rect, column, row))
            .map(|(_, index)| *index)
    }

    pub(crate) fn sort_toggle_at(&self, column: u16, row: u16) -> bool {
        self.sort_toggle.is_some_and(|rect| hit(rect, column, row))
    }
}

fn hit(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Draws the main UI and returns where its controls landed.
pub(crate) fn draw(frame: &mut Frame, app: &App) -> HitMap {
    let view = app.view();
    let mut hits = HitMap::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let title = Paragraph::new("Rewind Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(BOARD_WIDTH), Constraint::Length(HISTORY_WIDTH)])
        .split(chunks[1]);

    draw_board(frame, body[0], &view, app, &mut hits);
    draw_history(frame, body[1], &view, app, &mut hits);

    let status_style = match view.status() {
        StatusLine::Winner(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        StatusLine::Draw => Style::default().fg(Color::Magenta),
        StatusLine::NextPlayer(_) => Style::default().fg(Color::Yellow),
    };
    let status = Paragraph::new(view.status().to_string())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(
        "Arrows/N: move | Enter: select | 1-9: play | Tab: history | S: sort | Q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);

    hits
}

fn draw_board(frame: &mut Frame, area: Rect, view: &GameView, app: &App, hits: &mut HitMap) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    for (row, cells) in view.cells().chunks(3).enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(rows[row * 2]);

        for (col, cell) in cells.iter().enumerate() {
            let cell_area = cols[col * 2];
            draw_cell(frame, cell_area, cell, app);
            hits.cells.push((cell_area, *cell.position()));
            if col < 2 {
                draw_separator_vertical(frame, cols[col * 2 + 1]);
            }
        }
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, app: &App) {
    let (symbol, base_style) = match cell.square() {
        Square::Empty => (
            (cell.position().to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (
            player.to_string(),
            Style::default()
                .fg(match player {
                    crate::Player::X => Color::Blue,
                    crate::Player::O => Color::Red,
                })
                .add_modifier(Modifier::BOLD),
        ),
    };

    let mut style = base_style;
    if *cell.highlighted() {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if app.focus() == Focus::Board && *cell.position() == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(symbol), Line::from("")])
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_history(frame: &mut Frame, area: Rect, view: &GameView, app: &App, hits: &mut HitMap) {
    let border_style = if app.focus() == Focus::History {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title("History")
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let toggle = Paragraph::new(format!("[ {} ]", view.sort_toggle().label()))
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);
    frame.render_widget(toggle, parts[0]);
    hits.sort_toggle = Some(parts[0]);

    let items: Vec<ListItem> = view
        .moves()
        .iter()
        .map(|entry| {
            if entry.is_control() {
                ListItem::new(format!("[{}]", entry.label()))
                    .style(Style::default().fg(Color::Cyan))
            } else {
                ListItem::new(entry.label().as_str())
                    .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            }
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if app.focus() == Focus::History {
        state.select(Some(app.selected_row()));
    }
    let list_area = parts[2];
    frame.render_stateful_widget(list, list_area, &mut state);

    let offset = state.offset();
    let visible = view.moves().len().saturating_sub(offset);
    for line in 0..visible.min(list_area.height as usize) {
        let rect = Rect::new(list_area.x, list_area.y + line as u16, list_area.width, 1);
        hits.moves.push((rect, offset + line));
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines = vec![Line::from("│"); area.height as usize];
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
