//! Keyboard helpers for board navigation.

use crate::{Board, Position};
use crossterm::event::KeyCode;

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => return cursor,
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// First empty cell after `cursor` in reading order, wrapping to the top.
pub fn next_empty(cursor: Position, board: &Board) -> Option<Position> {
    let empty = Position::valid_moves(board);
    empty
        .iter()
        .find(|pos| pos.to_index() > cursor.to_index())
        .or_else(|| empty.first())
        .copied()
}

/// Maps the digit keys 1-9 to board indices 0-8.
pub fn digit_cell(c: char) -> Option<usize> {
    match c.to_digit(10) {
        Some(digit @ 1..=9) => Some(digit as usize - 1),
        _ => None,
    }
}
