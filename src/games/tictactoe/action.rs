//! First-class action types for tic-tac-toe.
//!
//! Moves and controls are domain events, not side effects. The frontend
//! turns input into a [`Control`], and [`GameState::apply`](super::GameState::apply)
//! turns a control into a state change.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a play was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The cell index is not on the board.
    #[display("cell {_0} is off the board")]
    OutOfBounds(usize),
    /// The square is already occupied.
    #[display("{_0} is already occupied")]
    SquareOccupied(Position),
    /// The displayed board already has a winner.
    #[display("the game is already won")]
    GameOver,
}

/// Result of a play request.
///
/// Rejected plays are not errors: the state is left untouched and the
/// reason is only reported for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The move was appended to history.
    Placed(Move),
    /// The play was ignored.
    Rejected(Rejection),
}

impl PlayOutcome {
    /// Whether the play changed the game.
    pub fn is_placed(&self) -> bool {
        matches!(self, PlayOutcome::Placed(_))
    }
}

/// An activatable element of the rendered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    /// Place the next mark on a cell.
    Play(Position),
    /// Show the board as it was after the given move.
    JumpTo(usize),
    /// Flip the move list order.
    ToggleSort,
}
