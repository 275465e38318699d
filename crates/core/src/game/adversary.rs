//! Adversary controller: shared vulnerability countdown and randomized wandering.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use super::motion;
use crate::rules::Rules;
use crate::state::{GameState, Map};
use crate::types::{Direction, LogEvent, Pos};

/// Source of the two random decisions adversaries make at intersections.
pub trait TurnSource {
    /// Fair coin: true means "turn here even though the way ahead is open".
    fn coin_flip(&mut self) -> bool;
    /// Uniform index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl TurnSource for ChaCha8Rng {
    fn coin_flip(&mut self) -> bool {
        self.next_u32() & 1 == 1
    }

    fn pick(&mut self, len: usize) -> usize {
        (self.next_u64() % len as u64) as usize
    }
}

/// Decrements the shared countdown and clears every flag when it reaches zero.
pub(crate) fn tick_vulnerability(state: &mut GameState, log: &mut Vec<LogEvent>) {
    if state.round.vulnerability_ticks == 0 {
        return;
    }
    state.round.vulnerability_ticks -= 1;
    if state.round.vulnerability_ticks == 0 {
        for adversary in state.adversaries.values_mut() {
            adversary.vulnerable = false;
        }
        log.push(LogEvent::VulnerabilityEnded);
    }
}

pub(crate) fn step_adversaries(
    state: &mut GameState,
    rules: &Rules,
    turns: &mut impl TurnSource,
    log: &mut Vec<LogEvent>,
) {
    let GameState { map, adversaries, .. } = state;
    for (id, adversary) in adversaries.iter_mut() {
        let body = &mut adversary.body;
        body.speed = rules.adversary_speed_for(adversary.vulnerable);

        if let Some(cell) = motion::snap_if_aligned(body) {
            body.heading = choose_heading(map, cell, body.heading, turns);
            // Fully enclosed: hold position rather than walk into a wall.
            if map.is_wall(cell.ahead(body.heading)) {
                body.heading = None;
            }
        }

        motion::step(body);
        if motion::wrap_tunnel(body, map.width()) {
            log.push(LogEvent::TunnelWrapped { adversary: Some(id) });
        }
    }
}

/// Heading decision at an aligned cell. Reversing is only chosen at a dead end.
fn choose_heading(
    map: &Map,
    cell: Pos,
    heading: Option<Direction>,
    turns: &mut impl TurnSource,
) -> Option<Direction> {
    let blocked = map.is_wall(cell.ahead(heading));
    let reverse = heading.map(Direction::reversed);
    let candidates: Vec<Direction> = Direction::ALL
        .into_iter()
        .filter(|direction| Some(*direction) != reverse && !map.is_wall(cell.step(*direction)))
        .collect();

    if !blocked && (candidates.is_empty() || !turns.coin_flip()) {
        return heading;
    }
    if !candidates.is_empty() {
        return Some(candidates[turns.pick(candidates.len())]);
    }
    match reverse {
        Some(back) if !map.is_wall(cell.step(back)) => Some(back),
        _ => heading,
    }
}
