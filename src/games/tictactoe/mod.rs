//! Tic-tac-toe with move history and time-travel navigation.

mod action;
mod history;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{Control, Move, PlayOutcome, Rejection};
pub use history::{GameState, HistoryError, SortOrder};
pub use position::Position;
pub use rules::{Evaluation, WinningLine, evaluate};
pub use types::{Board, GameStatus, Player, Square};
pub use view::{CellView, GameView, MoveEntry, SortToggle, StatusLine};
