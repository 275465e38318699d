use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use slotmap::SlotMap;

use crate::layout::Layout;
use crate::rules::Rules;
use crate::state::{Adversary, GameSnapshot, GameState, MobileEntity, Player, RoundState};
use crate::types::*;

mod adversary;
mod collision;
mod engine;
mod hash;
mod motion;
mod player;
#[cfg(test)]
mod test_support;

pub use adversary::TurnSource;

pub struct Game {
    seed: u64,
    tick: u64,
    rng: ChaCha8Rng,
    rules: Rules,
    state: GameState,
    log: Vec<LogEvent>,
}

impl Game {
    pub fn new(seed: u64, layout: &Layout, rules: Rules) -> Result<Self, GameError> {
        rules.validate()?;
        let rng = ChaCha8Rng::seed_from_u64(seed);

        let player = Player {
            body: MobileEntity::at_cell(layout.player_spawn, None, rules.player_speed),
            desired: None,
            spawn: layout.player_spawn,
        };

        let mut adversaries = SlotMap::with_key();
        for start in &layout.adversaries {
            adversaries.insert_with_key(|id| Adversary {
                id,
                tag: start.tag,
                body: MobileEntity::at_cell(start.pos, start.heading, rules.adversary_speed),
                vulnerable: false,
            });
        }

        let map = layout.map.clone();
        let round = RoundState {
            score: 0,
            lives: rules.starting_lives,
            pickups_remaining: map.count(CellKind::Pickup) as u32,
            vulnerability_ticks: 0,
            outcome: None,
        };

        Ok(Self {
            seed,
            tick: 0,
            rng,
            rules,
            state: GameState {
                map,
                player,
                adversaries,
                adversary_spawn: layout.adversary_spawn,
                round,
            },
            log: Vec::new(),
        })
    }

    /// Queues a turn for the player. It replaces any earlier queued turn and is
    /// applied at the first grid alignment where the turn is not into a wall.
    pub fn set_desired_heading(&mut self, direction: Direction) -> Result<(), GameError> {
        if self.state.round.is_finished() {
            return Err(GameError::RoundFinished);
        }
        self.state.player.desired = Some(direction);
        Ok(())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    pub fn outcome(&self) -> Option<RunOutcome> {
        self.state.round.outcome
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot(self.tick)
    }
}
