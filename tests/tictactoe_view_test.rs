//! Tests for the rendered game view and headless replay.

use rewind_tictactoe::{
    Control, GameState, OutputFormat, ReplayError, ReplayScript, SortOrder, render,
};

#[test]
fn test_initial_view_matches_fresh_game() {
    let view = GameState::new().view();
    assert_eq!(view.status().to_string(), "Next player: X");
    assert_eq!(view.moves().len(), 1);
    assert_eq!(view.moves()[0].label(), "Let's start the game");
    assert!(!view.moves()[0].is_control());
    assert!(view.cells().iter().all(|cell| !*cell.highlighted()));
}

#[test]
fn test_view_controls_drive_the_game() {
    let mut game = GameState::new();
    for cell in [0, 4, 1] {
        let control = *game.view().cells()[cell].control();
        game.apply(control).expect("play never fails");
    }

    let jump = game
        .view()
        .moves()
        .iter()
        .find(|entry| entry.label() == "Go to move #1")
        .and_then(|entry| *entry.control())
        .expect("move 1 is a control");
    assert_eq!(jump, Control::JumpTo(1));
    game.apply(jump).expect("jump in range");
    assert_eq!(game.current_move(), 1);

    let toggle = *game.view().sort_toggle().control();
    game.apply(toggle).expect("toggle never fails");
    let labels: Vec<String> = game.view().moves().iter().map(|m| m.label().clone()).collect();
    assert_eq!(
        labels,
        vec![
            "Go to move #3",
            "Go to move #2",
            "You are at move #1",
            "Let's restart the game"
        ]
    );
}

#[test]
fn test_replay_script_text_output() {
    let script = ReplayScript {
        cells: vec![0, 4, 1, 5, 2],
        jump: None,
        sort_order: SortOrder::Ascending,
    };
    let game = script.run().expect("valid script");
    let text = render(&game.view(), OutputFormat::Text).expect("text render");
    assert!(text.starts_with("Winner: X"));
    assert!(text.contains("*X*|*X*|*X*"));
    assert!(text.contains("You are at move #5"));
}

#[test]
fn test_replay_script_rejects_missing_move() {
    let script = ReplayScript {
        cells: vec![0, 4],
        jump: Some(7),
        sort_order: SortOrder::Ascending,
    };
    assert!(matches!(script.run(), Err(ReplayError::Jump(_))));
}
