//! Pure presentation layer: game state in, display descriptor out.
//!
//! Nothing here is cached. Frontends rebuild a [`GameView`] after every
//! event and activate the [`Control`]s it carries.

use super::Position;
use super::action::Control;
use super::history::{GameState, SortOrder};
use super::types::{GameStatus, Player, Square};
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// Status line shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum StatusLine {
    /// A line was completed.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// Full board, no line.
    #[display("Draw")]
    Draw,
    /// Game continues.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
}

/// One board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters)]
pub struct CellView {
    position: Position,
    square: Square,
    /// Part of the winning line.
    highlighted: bool,
    control: Control,
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct MoveEntry {
    move_index: usize,
    label: String,
    /// `None` for static labels.
    control: Option<Control>,
}

impl MoveEntry {
    #[instrument(level = "trace")]
    fn build(move_index: usize, history_len: usize, current_move: usize) -> Self {
        let (label, control) = if move_index == 0 {
            if history_len == 1 {
                ("Let's start the game".to_string(), None)
            } else {
                (
                    "Let's restart the game".to_string(),
                    Some(Control::JumpTo(0)),
                )
            }
        } else if move_index == current_move {
            (format!("You are at move #{move_index}"), None)
        } else {
            (
                format!("Go to move #{move_index}"),
                Some(Control::JumpTo(move_index)),
            )
        };
        Self {
            move_index,
            label,
            control,
        }
    }

    /// Whether this entry can be activated.
    pub fn is_control(&self) -> bool {
        self.control.is_some()
    }
}

/// The button that flips the move list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct SortToggle {
    #[getter(skip)]
    label: &'static str,
    control: Control,
}

impl SortToggle {
    /// Button text, naming the order a click switches to.
    pub fn label(&self) -> &'static str {
        self.label
    }

    fn for_order(order: SortOrder) -> Self {
        let label = match order {
            SortOrder::Ascending => "Sort descending",
            SortOrder::Descending => "Sort ascending",
        };
        Self {
            label,
            control: Control::ToggleSort,
        }
    }
}

/// Everything a frontend needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameView {
    status: StatusLine,
    /// Row-major.
    cells: [CellView; 9],
    /// Already in display order.
    moves: Vec<MoveEntry>,
    sort_toggle: SortToggle,
    current_move: usize,
}

impl GameView {
    /// Derives the view from a game state.
    #[instrument(
        skip(game),
        fields(current_move = game.current_move(), sort_order = ?game.sort_order())
    )]
    pub fn build(game: &GameState) -> Self {
        let evaluation = game.evaluation();
        let board = game.current_board();

        let status = match evaluation.status() {
            GameStatus::Won(player) => StatusLine::Winner(player),
            GameStatus::Draw => StatusLine::Draw,
            GameStatus::InProgress => StatusLine::NextPlayer(game.next_player()),
        };

        let cells = Position::ALL.map(|position| CellView {
            position,
            square: board.get(position),
            highlighted: evaluation
                .winning_line()
                .is_some_and(|line| line.contains(position)),
            control: Control::Play(position),
        });

        let history_len = game.history().len();
        let mut moves: Vec<MoveEntry> = (0..history_len)
            .map(|index| MoveEntry::build(index, history_len, game.current_move()))
            .collect();
        if game.sort_order() == SortOrder::Descending {
            moves.reverse();
        }

        Self {
            status,
            cells,
            moves,
            sort_toggle: SortToggle::for_order(game.sort_order()),
            current_move: game.current_move(),
        }
    }

    /// Looks up a cell.
    pub fn cell(&self, position: Position) -> &CellView {
        &self.cells[position.to_index()]
    }

    /// Board indices of highlighted cells, in row-major order.
    pub fn highlighted(&self) -> Vec<usize> {
        self.cells
            .iter()
            .filter(|cell| cell.highlighted)
            .map(|cell| cell.position.to_index())
            .collect()
    }
}

impl std::fmt::Display for GameView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.status)?;
        writeln!(f)?;
        for (row, cells) in self.cells.chunks(3).enumerate() {
            let rendered: Vec<String> = cells
                .iter()
                .map(|cell| match (cell.square, cell.highlighted) {
                    (Square::Occupied(player), true) => format!("*{player}*"),
                    (Square::Occupied(player), false) => format!(" {player} "),
                    (Square::Empty, _) => format!(" {} ", cell.position.to_index() + 1),
                })
                .collect();
            writeln!(f, "{}", rendered.join("|"))?;
            if row < 2 {
                writeln!(f, "---+---+---")?;
            }
        }
        writeln!(f)?;
        writeln!(f, "[{}]", self.sort_toggle.label)?;
        for entry in &self.moves {
            if entry.is_control() {
                writeln!(f, "  [{}]", entry.label)?;
            } else {
                writeln!(f, "  {}", entry.label)?;
            }
        }
        Ok(())
    }
}
