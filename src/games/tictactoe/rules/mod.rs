//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](super::Board) snapshot. Nothing
//! here knows about history or whose turn it is.

pub mod draw;
pub mod evaluation;
pub mod win;

pub use draw::is_full;
pub use evaluation::{Evaluation, evaluate};
pub use win::{LINES, WinningLine, check_winner, winning_line};
