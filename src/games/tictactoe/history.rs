//! Game history with time-travel navigation.
//!
//! History is an append-only log of board snapshots plus a cursor. Playing
//! from an earlier cursor position discards every snapshot after it.

use super::Position;
use super::action::{Control, Move, PlayOutcome, Rejection};
use super::rules::{Evaluation, evaluate};
use super::types::{Board, Player};
use super::view::GameView;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Display order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Returns the opposite order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Errors from history navigation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HistoryError {
    /// The requested move is not in history.
    #[display("move #{requested} is outside a history of {len} entries")]
    MoveOutOfRange {
        /// Requested move index.
        requested: usize,
        /// Number of snapshots in history.
        len: usize,
    },
}

/// Complete game state: every snapshot, the displayed one, and list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Board snapshots; index 0 is the empty board.
    history: Vec<Board>,
    /// Index of the displayed snapshot.
    current_move: usize,
    /// Move list display order.
    sort_order: SortOrder,
}

impl GameState {
    /// Creates a new game with an empty board.
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::default())
    }

    /// Creates a new game whose move list starts in the given order.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
            sort_order,
        }
    }

    /// Returns every snapshot, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the index of the displayed snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Returns the move list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Returns the displayed board.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Returns the player who moves next from the displayed board.
    pub fn next_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Evaluates the displayed board.
    pub fn evaluation(&self) -> Evaluation {
        evaluate(self.current_board())
    }

    /// Builds the display descriptor for the current state.
    pub fn view(&self) -> GameView {
        GameView::build(self)
    }

    /// Places the next mark at `cell_index`.
    ///
    /// Off-board cells, occupied squares and already-won boards are ignored.
    /// Otherwise any snapshots after the displayed one are discarded, the new
    /// snapshot is appended, and it becomes the displayed one.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn play(&mut self, cell_index: usize) -> PlayOutcome {
        debug!("Cell clicked");
        let Some(position) = Position::from_index(cell_index) else {
            return self.reject(Rejection::OutOfBounds(cell_index));
        };
        let board = *self.current_board();
        if self.evaluation().winning_line().is_some() {
            return self.reject(Rejection::GameOver);
        }
        if !board.is_empty(position) {
            return self.reject(Rejection::SquareOccupied(position));
        }

        let player = self.next_player();
        let discarded = self.history.len() - (self.current_move + 1);
        self.history.truncate(self.current_move + 1);
        self.history.push(board.with_mark(position, player));
        self.current_move = self.history.len() - 1;

        let placed = Move::new(player, position);
        info!(%placed, move_number = self.current_move, discarded, "Move placed");
        debug!(board = %self.current_board(), "Board after move");
        PlayOutcome::Placed(placed)
    }

    fn reject(&self, rejection: Rejection) -> PlayOutcome {
        debug!(%rejection, "Play ignored");
        PlayOutcome::Rejected(rejection)
    }

    /// Displays the snapshot after move `move_index` without touching history.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::MoveOutOfRange`] if `move_index` is not in
    /// history; the state is left unchanged.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), HistoryError> {
        if move_index >= self.history.len() {
            return Err(HistoryError::MoveOutOfRange {
                requested: move_index,
                len: self.history.len(),
            });
        }
        self.current_move = move_index;
        debug!("Jumped");
        Ok(())
    }

    /// Flips the move list order.
    #[instrument(skip(self))]
    pub fn toggle_sort(&mut self) {
        self.sort_order = self.sort_order.toggle();
        debug!(sort_order = ?self.sort_order, "Sort toggled");
    }

    /// Applies a control from the rendered view.
    ///
    /// # Errors
    ///
    /// Only [`Control::JumpTo`] can fail, see [`GameState::jump_to`].
    #[instrument(skip(self))]
    pub fn apply(&mut self, control: Control) -> Result<(), HistoryError> {
        match control {
            Control::Play(position) => {
                self.play(position.to_index());
            }
            Control::JumpTo(move_index) => self.jump_to(move_index)?,
            Control::ToggleSort => self.toggle_sort(),
        }
        Ok(())
    }

    /// Applies a control, logging instead of returning a rejected jump.
    pub fn apply_or_log(&mut self, control: Control) {
        if let Err(e) = self.apply(control) {
            warn!(error = %e, ?control, "Control ignored");
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
