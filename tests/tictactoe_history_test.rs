//! Tests for move history and time-travel navigation.

use rewind_tictactoe::{
    GameState, GameStatus, PlayOutcome, Player, Position, Rejection, SortOrder, Square,
    StatusLine,
};

fn play_all(game: &mut GameState, cells: &[usize]) {
    for cell in cells {
        assert!(game.play(*cell).is_placed(), "cell {cell} should be playable");
    }
}

#[test]
fn test_top_row_win() {
    let mut game = GameState::new();
    play_all(&mut game, &[0, 4, 1, 5, 2]);

    let evaluation = game.evaluation();
    assert_eq!(evaluation.status(), GameStatus::Won(Player::X));
    assert_eq!(evaluation.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
    assert_eq!(game.view().status().to_string(), "Winner: X");
}

#[test]
fn test_full_board_draw() {
    let mut game = GameState::new();
    // X: 0,1,5,6,7  O: 2,3,4,8
    play_all(&mut game, &[0, 2, 1, 3, 5, 4, 6, 8, 7]);

    assert_eq!(game.evaluation().status(), GameStatus::Draw);
    assert!(game.evaluation().winning_line().is_none());
    assert_eq!(*game.view().status(), StatusLine::Draw);
}

#[test]
fn test_replay_from_earlier_move_truncates() {
    let mut game = GameState::new();
    play_all(&mut game, &[0, 4, 8]);
    game.jump_to(1).expect("move 1 exists");
    assert_eq!(game.history().len(), 4);

    play_all(&mut game, &[3]);
    assert_eq!(game.history().len(), 3);
    assert_eq!(game.current_move(), 2);
    assert_eq!(
        game.current_board().get(Position::MiddleLeft),
        Square::Occupied(Player::O)
    );
}

#[test]
fn test_won_board_rejects_plays_but_not_navigation() {
    let mut game = GameState::new();
    play_all(&mut game, &[0, 4, 1, 5, 2]);
    let history = game.history().to_vec();

    assert_eq!(game.play(8), PlayOutcome::Rejected(Rejection::GameOver));
    assert_eq!(game.history(), history.as_slice());

    game.toggle_sort();
    assert_eq!(game.sort_order(), SortOrder::Descending);
    game.jump_to(2).expect("move 2 exists");
    assert_eq!(game.view().status().to_string(), "Next player: X");
}

#[test]
fn test_occupied_square_is_ignored() {
    let mut game = GameState::new();
    play_all(&mut game, &[4]);
    let before = game.clone();
    assert!(!game.play(4).is_placed());
    assert_eq!(game, before);
}

#[test]
fn test_snapshots_differ_by_one_cell() {
    let mut game = GameState::new();
    play_all(&mut game, &[4, 0, 8, 2]);
    game.jump_to(2).expect("move 2 exists");
    play_all(&mut game, &[6]);

    for pair in game.history().windows(2) {
        let changed = Position::ALL
            .iter()
            .filter(|pos| pair[0].get(**pos) != pair[1].get(**pos))
            .count();
        assert_eq!(changed, 1);
        assert_eq!(pair[1].marks_placed(), pair[0].marks_placed() + 1);
    }
}

#[test]
fn test_turn_follows_displayed_move() {
    let mut game = GameState::new();
    play_all(&mut game, &[0, 1, 2]);
    for (index, expected) in [(0, Player::X), (1, Player::O), (2, Player::X), (3, Player::O)] {
        game.jump_to(index).expect("move exists");
        assert_eq!(game.next_player(), expected);
    }
}
