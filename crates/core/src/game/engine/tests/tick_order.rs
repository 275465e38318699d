//! Tests for the order of work inside a single tick.

use super::support::*;

#[test]
fn capture_uses_post_move_positions() {
    // Player and adversary start 1.0 apart and close 0.225 in one tick.
    let rows = ["#######", "#  .  #", "#######"];
    let adversaries = [start(Pos { y: 1, x: 3 }, Some(Direction::Left))];
    let mut game =
        game_on(&rows, Pos { y: 1, x: 2 }, Pos { y: 1, x: 5 }, &adversaries, Rules::default());
    game.set_desired_heading(Direction::Right).unwrap();

    game.advance(1);
    let snapshot = game.snapshot();
    assert_eq!(snapshot.lives, 2);
    assert_eq!(snapshot.player.pos, Vec2 { x: 2.0, y: 1.0 });
    assert_eq!(snapshot.player.heading, None);
}

#[test]
fn final_pickup_and_final_life_on_one_tick_is_a_defeat() {
    // The player eats the last pickup on the same tick a roaming adversary reaches it.
    let rows = ["######", "#.   #", "######"];
    let adversaries = [start(Pos { y: 1, x: 2 }, Some(Direction::Left))];
    let rules = Rules { starting_lives: 1, adversary_speed: 0.25, ..Rules::default() };
    let mut game = game_on(&rows, Pos { y: 1, x: 1 }, Pos { y: 1, x: 4 }, &adversaries, rules);

    let result = game.advance(10);

    assert_eq!(result.simulated_ticks, 1);
    assert!(matches!(result.stop_reason, AdvanceStopReason::Finished(RunOutcome::Defeat)));
    assert_eq!(game.snapshot().pickups_remaining, 0);
    assert_eq!(game.snapshot().score, 10);
    let finishes: Vec<_> = game
        .log()
        .iter()
        .filter(|event| matches!(event, LogEvent::RoundFinished { .. }))
        .collect();
    assert_eq!(finishes, vec![&LogEvent::RoundFinished { outcome: RunOutcome::Defeat }]);
}

#[test]
fn snapshot_reports_tick_and_roster() {
    let mut game = Game::new(3, &Layout::classic(), Rules::default()).unwrap();
    game.advance(7);
    let snapshot = game.snapshot();
    assert_eq!(snapshot.tick, 7);
    let tags: Vec<AdversaryTag> = snapshot.adversaries.iter().map(|a| a.tag).collect();
    assert_eq!(
        tags,
        vec![AdversaryTag::Red, AdversaryTag::Pink, AdversaryTag::Cyan, AdversaryTag::Orange]
    );
}
