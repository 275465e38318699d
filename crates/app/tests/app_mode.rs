use macroquad::prelude::KeyCode;
use maze_chase::app_loop::{AcceptedInput, AppMode, AppState};
use maze_core::{Direction, Game, InputJournal, Layout, LayoutSpec, Pos, Rules, RunOutcome};

fn classic_game(seed: u64) -> Game {
    Game::new(seed, &Layout::classic(), Rules::default()).unwrap()
}

fn short_hall_game() -> Game {
    let spec = LayoutSpec {
        rows: vec!["####".into(), "#..#".into(), "####".into()],
        player_spawn: Pos { y: 1, x: 1 },
        adversary_spawn: Pos { y: 1, x: 2 },
        adversaries: Vec::new(),
    };
    Game::new(0, &Layout::from_spec(&spec).unwrap(), Rules::default()).unwrap()
}

#[test]
fn space_toggles_pause_and_pausing_stops_the_clock() {
    let mut game = classic_game(1);
    let mut app = AppState::new();

    app.tick(&mut game, &[]);
    assert_eq!(game.current_tick(), 1);

    app.tick(&mut game, &[KeyCode::Space]);
    assert_eq!(app.mode, AppMode::Paused);
    assert_eq!(game.current_tick(), 1);

    app.tick(&mut game, &[]);
    assert_eq!(game.current_tick(), 1);

    app.tick(&mut game, &[KeyCode::Space]);
    assert_eq!(app.mode, AppMode::Playing);
    assert_eq!(game.current_tick(), 2);
}

#[test]
fn last_direction_key_of_the_frame_wins() {
    let mut game = classic_game(2);
    let mut app = AppState::new();

    app.tick(&mut game, &[KeyCode::Up, KeyCode::Space, KeyCode::A]);

    assert_eq!(
        app.accepted_inputs,
        vec![AcceptedInput { tick_boundary: 0, heading: Direction::Left }]
    );
}

#[test]
fn headings_are_accepted_while_paused_and_journaled_with_their_tick() {
    let mut game = classic_game(3);
    let mut app = AppState::new();
    let mut journal = InputJournal::new(3, Rules::default());

    for _ in 0..5 {
        app.tick(&mut game, &[]);
    }
    app.tick(&mut game, &[KeyCode::Space]);
    app.tick(&mut game, &[KeyCode::Right]);
    app.drain_into(&mut journal);

    assert_eq!(journal.inputs.len(), 1);
    assert_eq!(journal.inputs[0].tick_boundary, 5);
    assert_eq!(journal.inputs[0].heading, Direction::Right);
    assert!(app.accepted_inputs.is_empty());
}

#[test]
fn finished_round_ignores_further_input() {
    let mut game = short_hall_game();
    let mut app = AppState::new();

    app.tick(&mut game, &[KeyCode::Right]);
    for _ in 0..10 {
        app.tick(&mut game, &[]);
    }
    assert_eq!(app.mode, AppMode::Finished(RunOutcome::Victory));
    let tick = game.current_tick();

    app.tick(&mut game, &[KeyCode::Left, KeyCode::Space]);

    assert_eq!(app.mode, AppMode::Finished(RunOutcome::Victory));
    assert!(app.accepted_inputs.is_empty());
    assert_eq!(game.current_tick(), tick);
}
