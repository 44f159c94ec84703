//! Board evaluation: outcome plus the winning line, from one snapshot.

use super::super::{Board, GameStatus};
use super::draw::is_full;
use super::win::{WinningLine, winning_line};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    status: GameStatus,
    winning_line: Option<WinningLine>,
}

impl Evaluation {
    /// Won, drawn, or still in progress.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The completed line, present only when the game is won.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }
}

/// Evaluates a board snapshot.
///
/// A completed line wins even on a full board. Otherwise a full board is a
/// draw and anything else is still in progress.
#[instrument(level = "debug", skip(board))]
pub fn evaluate(board: &Board) -> Evaluation {
    let evaluation = match winning_line(board) {
        Some(line) => Evaluation {
            status: GameStatus::Won(line.player()),
            winning_line: Some(line),
        },
        None if is_full(board) => Evaluation {
            status: GameStatus::Draw,
            winning_line: None,
        },
        None => Evaluation {
            status: GameStatus::InProgress,
            winning_line: None,
        },
    };
    debug!(status = ?evaluation.status, "Evaluated board");
    evaluation
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position};
    use super::*;

    fn board_from(marks: &[(usize, Player)]) -> Board {
        marks.iter().fold(Board::new(), |board, (index, player)| {
            let pos = Position::from_index(*index).expect("index in range");
            board.with_mark(pos, *player)
        })
    }

    #[test]
    fn test_empty_board_in_progress() {
        let evaluation = evaluate(&Board::new());
        assert_eq!(evaluation.status(), GameStatus::InProgress);
        assert!(evaluation.winning_line().is_none());
    }

    #[test]
    fn test_partial_boards_without_line_in_progress() {
        let boards = [
            // X X O across the top
            board_from(&[(0, Player::X), (1, Player::X), (2, Player::O)]),
            // X O X down the middle column, O in a corner
            board_from(&[
                (1, Player::X),
                (4, Player::O),
                (7, Player::X),
                (0, Player::O),
            ]),
            // Two marks on each diagonal, one cell short
            board_from(&[
                (0, Player::X),
                (2, Player::O),
                (4, Player::X),
                (6, Player::O),
            ]),
            // Eight marks, last cell empty
            board_from(&[
                (0, Player::X),
                (1, Player::O),
                (2, Player::X),
                (3, Player::X),
                (4, Player::O),
                (5, Player::O),
                (6, Player::O),
                (7, Player::X),
            ]),
        ];
        for board in &boards {
            let evaluation = evaluate(board);
            assert_eq!(evaluation.status(), GameStatus::InProgress, "{board}");
            assert!(evaluation.winning_line().is_none(), "{board}");
        }
    }

    #[test]
    fn test_win_reports_line() {
        let board = board_from(&[
            (0, Player::X),
            (4, Player::O),
            (1, Player::X),
            (5, Player::O),
            (2, Player::X),
        ]);
        let evaluation = evaluate(&board);
        assert_eq!(evaluation.status(), GameStatus::Won(Player::X));
        assert_eq!(
            evaluation.winning_line().map(|l| l.indices()),
            Some([0, 1, 2])
        );
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = board_from(&[
            (0, Player::X),
            (1, Player::X),
            (5, Player::X),
            (6, Player::X),
            (7, Player::X),
            (2, Player::O),
            (3, Player::O),
            (4, Player::O),
            (8, Player::O),
        ]);
        let evaluation = evaluate(&board);
        assert_eq!(evaluation.status(), GameStatus::Draw);
        assert!(evaluation.winning_line().is_none());
    }

    #[test]
    fn test_win_on_full_board_is_win() {
        // X X X / O O X / X O O
        let board = board_from(&[
            (0, Player::X),
            (1, Player::X),
            (2, Player::X),
            (3, Player::O),
            (4, Player::O),
            (5, Player::X),
            (6, Player::X),
            (7, Player::O),
            (8, Player::O),
        ]);
        assert_eq!(evaluate(&board).status(), GameStatus::Won(Player::X));
    }
}
