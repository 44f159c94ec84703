//! Rewind Tic-Tac-Toe - tic-tac-toe with move history and time travel
//!
//! Every move appends a board snapshot to history. Any snapshot can be
//! revisited, and playing from an earlier snapshot discards the moves
//! after it.
//!
//! # Architecture
//!
//! - **GameState**: history of board snapshots plus the displayed index
//! - **Rules**: pure win / draw evaluation of a single board
//! - **GameView**: pure display descriptor derived from a game state
//! - **TUI**: `ratatui` frontend that draws a view and maps input to controls
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, StatusLine, Player};
//!
//! let mut game = GameState::new();
//! for cell in [0, 4, 1, 5, 2] {
//!     game.play(cell);
//! }
//! assert_eq!(*game.view().status(), StatusLine::Winner(Player::X));
//!
//! game.jump_to(1).unwrap();
//! game.play(3);
//! assert_eq!(game.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod replay;
mod tui;

// Crate-level exports - Configuration
pub use config::{Config, ConfigError, DEFAULT_CONFIG_FILE};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, CellView, Control, Evaluation, GameState, GameStatus, GameView, HistoryError, Move,
    MoveEntry, Player, PlayOutcome, Position, Rejection, SortOrder, SortToggle, Square,
    StatusLine, WinningLine, evaluate, rules,
};

// Crate-level exports - Headless replay
pub use replay::{OutputFormat, ReplayError, ReplayScript, render};

// Crate-level exports - Terminal UI
pub use tui::{App, Focus, run_tui};
