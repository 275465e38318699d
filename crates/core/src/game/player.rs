//! Player controller: queued turns at intersections, wall stops, pickups and scoring.

use super::motion;
use crate::rules::Rules;
use crate::state::GameState;
use crate::types::{ConsumeOutcome, LogEvent};

pub(crate) fn step_player(state: &mut GameState, rules: &Rules, log: &mut Vec<LogEvent>) {
    let GameState { map, player, adversaries, round, .. } = state;
    let body = &mut player.body;

    if let Some(cell) = motion::snap_if_aligned(body) {
        // An illegal queued turn stays queued and is retried at the next alignment.
        if let Some(desired) = player.desired
            && !map.is_wall(cell.step(desired))
        {
            body.heading = Some(desired);
            player.desired = None;
        } else if map.is_wall(cell.ahead(body.heading)) {
            body.heading = None;
        }
    }

    motion::step(body);
    if motion::wrap_tunnel(body, map.width()) {
        log.push(LogEvent::TunnelWrapped { adversary: None });
    }

    let cell = body.cell();
    match map.consume(cell) {
        ConsumeOutcome::Pickup => {
            round.score = round.score.saturating_add(rules.pickup_score);
            round.pickups_remaining = round.pickups_remaining.saturating_sub(1);
            log.push(LogEvent::PickupConsumed { cell });
        }
        ConsumeOutcome::BonusPickup => {
            round.score = round.score.saturating_add(rules.bonus_pickup_score);
            round.vulnerability_ticks = rules.vulnerability_ticks;
            for adversary in adversaries.values_mut() {
                adversary.vulnerable = true;
            }
            log.push(LogEvent::BonusPickupConsumed { cell });
        }
        ConsumeOutcome::Nothing => {}
    }
}
