//! Application state and logic.

use super::input::{digit_cell, move_cursor, next_empty};
use super::ui::HitMap;
use crate::{Control, GameState, GameView, Position, SortOrder};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tracing::{debug, info, instrument};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the history selection.
    History,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    /// Row of the move list in display order.
    selected_row: usize,
    hit_map: HitMap,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(sort_order: SortOrder) -> Self {
        Self {
            game: GameState::with_sort_order(sort_order),
            cursor: Position::Center,
            focus: Focus::default(),
            selected_row: 0,
            hit_map: HitMap::default(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Derives the view to draw.
    pub fn view(&self) -> GameView {
        self.game.view()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected move list row.
    pub fn selected_row(&self) -> usize {
        self.selected_row
    }

    /// Whether the event loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Stores the clickable areas of the last frame.
    pub(crate) fn set_hit_map(&mut self, hit_map: HitMap) {
        self.hit_map = hit_map;
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                debug!(focus = ?self.focus, "Focus changed");
            }
            KeyCode::Char('s') | KeyCode::Char('S') => self.activate(Control::ToggleSort),
            KeyCode::Char('n') | KeyCode::Char('N') => {
                match next_empty(self.cursor, self.game.current_board()) {
                    Some(position) => {
                        self.focus = Focus::Board;
                        self.cursor = position;
                    }
                    None => debug!("No empty cell to move to"),
                }
            }
            KeyCode::Char(c) if digit_cell(c).is_some() => {
                if let Some(position) = digit_cell(c).and_then(Position::from_index) {
                    self.cursor = position;
                    self.activate(Control::Play(position));
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.activate(Control::Play(self.cursor)),
                Focus::History => self.activate_selected_row(),
            },
            code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                match self.focus {
                    Focus::Board => self.cursor = move_cursor(self.cursor, code),
                    Focus::History => self.move_selection(code),
                }
            }
            _ => {}
        }
    }

    /// Handles a mouse event; only left clicks do anything.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let (column, row) = (mouse.column, mouse.row);

        if let Some(position) = self.hit_map.cell_at(column, row) {
            debug!(?position, "Cell clicked");
            self.focus = Focus::Board;
            self.cursor = position;
            self.activate(Control::Play(position));
        } else if let Some(display_row) = self.hit_map.move_row_at(column, row) {
            debug!(display_row, "Move list clicked");
            self.focus = Focus::History;
            self.selected_row = display_row;
            self.activate_selected_row();
        } else if self.hit_map.sort_toggle_at(column, row) {
            debug!("Sort toggle clicked");
            self.activate(Control::ToggleSort);
        }
    }

    fn quit(&mut self) {
        info!("User quit");
        self.should_quit = true;
    }

    fn activate_selected_row(&mut self) {
        let control = self
            .view()
            .moves()
            .get(self.selected_row)
            .and_then(|entry| *entry.control());
        match control {
            Some(control) => self.activate(control),
            None => debug!(row = self.selected_row, "Selected entry is not a control"),
        }
    }

    fn move_selection(&mut self, key: KeyCode) {
        let last = self.game.history().len() - 1;
        self.selected_row = match key {
            KeyCode::Up => self.selected_row.saturating_sub(1),
            KeyCode::Down => (self.selected_row + 1).min(last),
            _ => self.selected_row,
        };
    }

    /// Applies a control and keeps the history selection on a valid row.
    fn activate(&mut self, control: Control) {
        self.game.apply_or_log(control);
        let last = self.game.history().len() - 1;
        if control == Control::ToggleSort {
            // Keep the same entry selected after the list flips.
            self.selected_row = last.saturating_sub(self.selected_row);
        }
        self.selected_row = self.selected_row.min(last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_digits_play_cells() {
        let mut app = App::new(SortOrder::Ascending);
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('5'));
        let board = app.game().current_board();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::O));
        assert_eq!(app.cursor(), Position::Center);
    }

    #[test]
    fn test_arrows_and_enter_play_at_cursor() {
        let mut app = App::new(SortOrder::Ascending);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.game().current_board().get(Position::TopLeft),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_history_focus_jumps() {
        let mut app = App::new(SortOrder::Ascending);
        for c in ['1', '5', '2'] {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus(), Focus::History);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game().current_move(), 1);
        assert_eq!(app.game().history().len(), 4);
    }

    #[test]
    fn test_enter_on_static_label_does_nothing() {
        let mut app = App::new(SortOrder::Ascending);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game(), &GameState::new());
    }

    #[test]
    fn test_sort_keeps_selected_entry() {
        let mut app = App::new(SortOrder::Ascending);
        for c in ['1', '5', '2'] {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_row(), 1);
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.game().sort_order(), SortOrder::Descending);
        assert_eq!(app.selected_row(), 2);
        let view = app.view();
        assert_eq!(*view.moves()[app.selected_row()].move_index(), 1);
    }

    #[test]
    fn test_next_empty_key_skips_played_cells() {
        let mut app = App::new(SortOrder::Ascending);
        press(&mut app, KeyCode::Char('6'));
        press(&mut app, KeyCode::Char('7'));
        assert_eq!(app.cursor(), Position::BottomLeft);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.cursor(), Position::BottomCenter);

        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.cursor(), Position::MiddleLeft);
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.cursor(), Position::BottomCenter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.game().current_board().get(Position::BottomCenter),
            Square::Occupied(Player::O)
        );
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(SortOrder::Ascending);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());

        let mut app = App::new(SortOrder::Ascending);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }
}
