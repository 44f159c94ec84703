//! Headless replay: drive a game from a list of cells and render the result.

use crate::{GameState, GameView, HistoryError, PlayOutcome, SortOrder};
use derive_more::{Display, Error, From};
use tracing::{debug, info, instrument};

/// Errors from a replay script.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum ReplayError {
    /// The requested jump target does not exist after the plays.
    #[display("Cannot jump: {_0}")]
    Jump(HistoryError),
    /// The view could not be serialized.
    #[display("Cannot render JSON: {_0}")]
    #[from(ignore)]
    Json(#[error(not(source))] String),
}

/// Output format for a replayed view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text board and move list.
    #[default]
    Text,
    /// Pretty-printed JSON of the full view.
    Json,
}

/// A scripted sequence of interactions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReplayScript {
    /// Cell indices (0-8) played in order. Illegal plays are ignored.
    pub cells: Vec<usize>,
    /// Move to jump to after all plays.
    pub jump: Option<usize>,
    /// Order of the rendered move list.
    pub sort_order: SortOrder,
}

impl ReplayScript {
    /// Runs the script against a fresh game.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError::Jump`] if the jump target is not in history.
    #[instrument(skip(self), fields(plays = self.cells.len(), jump = ?self.jump))]
    pub fn run(&self) -> Result<GameState, ReplayError> {
        let mut game = GameState::new();
        let mut ignored = 0usize;
        for cell in &self.cells {
            if let PlayOutcome::Rejected(rejection) = game.play(*cell) {
                debug!(cell, %rejection, "Scripted play ignored");
                ignored += 1;
            }
        }
        if let Some(move_index) = self.jump {
            game.jump_to(move_index)?;
        }
        if self.sort_order != game.sort_order() {
            game.toggle_sort();
        }
        info!(
            history_len = game.history().len(),
            current_move = game.current_move(),
            ignored,
            "Replay finished"
        );
        Ok(game)
    }
}

/// Renders a view in the requested format.
pub fn render(view: &GameView, format: OutputFormat) -> Result<String, ReplayError> {
    match format {
        OutputFormat::Text => Ok(view.to_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(view).map_err(|e| ReplayError::Json(e.to_string()))
        }
    }
}
