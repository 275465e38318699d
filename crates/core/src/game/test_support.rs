//! Shared test fixtures for the `game` submodule test suites.
//! Small hand-drawn boards plus a scripted turn source so adversary decisions
//! can be pinned without going through the seeded RNG.

use std::collections::VecDeque;

use super::*;
use crate::layout::{AdversaryStart, LayoutSpec};

pub(super) fn start(pos: Pos, heading: Option<Direction>) -> AdversaryStart {
    AdversaryStart { pos, heading, tag: AdversaryTag::Red }
}

pub(super) fn layout_from(
    rows: &[&str],
    player_spawn: Pos,
    adversary_spawn: Pos,
    adversaries: &[AdversaryStart],
) -> Layout {
    let spec = LayoutSpec {
        rows: rows.iter().map(|row| row.to_string()).collect(),
        player_spawn,
        adversary_spawn,
        adversaries: adversaries.to_vec(),
    };
    Layout::from_spec(&spec).expect("fixture layout is valid")
}

pub(super) fn game_on(
    rows: &[&str],
    player_spawn: Pos,
    adversary_spawn: Pos,
    adversaries: &[AdversaryStart],
    rules: Rules,
) -> Game {
    let layout = layout_from(rows, player_spawn, adversary_spawn, adversaries);
    Game::new(0, &layout, rules).expect("fixture rules are valid")
}

pub(super) fn state_from(
    rows: &[&str],
    player_spawn: Pos,
    adversary_spawn: Pos,
    adversaries: &[AdversaryStart],
) -> GameState {
    game_on(rows, player_spawn, adversary_spawn, adversaries, Rules::default()).state
}

/// Replays fixed coin flips and picks. Panics when a test draws more than it scripted.
pub(super) struct ScriptedTurns {
    coins: VecDeque<bool>,
    picks: VecDeque<usize>,
    picked_lens: Vec<usize>,
}

impl ScriptedTurns {
    pub(super) fn new(coins: &[bool], picks: &[usize]) -> Self {
        Self {
            coins: coins.iter().copied().collect(),
            picks: picks.iter().copied().collect(),
            picked_lens: Vec::new(),
        }
    }

    /// Candidate-list lengths seen by each `pick` call, in order.
    pub(super) fn picked_lens(&self) -> &[usize] {
        &self.picked_lens
    }

    pub(super) fn is_exhausted(&self) -> bool {
        self.coins.is_empty() && self.picks.is_empty()
    }
}

impl TurnSource for ScriptedTurns {
    fn coin_flip(&mut self) -> bool {
        self.coins.pop_front().expect("unscripted coin flip")
    }

    fn pick(&mut self, len: usize) -> usize {
        self.picked_lens.push(len);
        let index = self.picks.pop_front().expect("unscripted pick");
        assert!(index < len, "scripted pick {index} out of range for {len} candidates");
        index
    }
}
