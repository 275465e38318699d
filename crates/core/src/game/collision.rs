//! Proximity checks between the player and adversaries, plus round-end detection.

use crate::rules::Rules;
use crate::state::GameState;
use crate::types::{LogEvent, RunOutcome, Vec2};

pub(crate) fn resolve_collisions(state: &mut GameState, rules: &Rules, log: &mut Vec<LogEvent>) {
    let GameState { player, adversaries, adversary_spawn, round, .. } = state;
    let spawn = Vec2::from_cell(*adversary_spawn);

    for (id, adversary) in adversaries.iter_mut() {
        if round.is_finished() {
            break;
        }
        if player.body.pos.distance(adversary.body.pos) >= rules.capture_distance {
            continue;
        }

        if adversary.vulnerable {
            round.score = round.score.saturating_add(rules.capture_score);
            adversary.body.pos = spawn;
            log.push(LogEvent::AdversaryCaptured { adversary: id });
            continue;
        }

        round.lives = round.lives.saturating_sub(1);
        log.push(LogEvent::PlayerCaught { adversary: id, lives_left: round.lives });
        if round.lives > 0 {
            player.reset_to_spawn();
        } else if round.finish(RunOutcome::Defeat) {
            log.push(LogEvent::RoundFinished { outcome: RunOutcome::Defeat });
        }
    }
}

pub(crate) fn check_victory(state: &mut GameState, log: &mut Vec<LogEvent>) {
    if state.round.pickups_remaining == 0 && state.round.finish(RunOutcome::Victory) {
        log.push(LogEvent::RoundFinished { outcome: RunOutcome::Victory });
    }
}
