//! Stable snapshot hashing for deterministic verification.
//! Positions are hashed by bit pattern, so two runs only match when every
//! floating-point step was identical.

use std::hash::Hasher;

use super::*;
use xxhash_rust::xxh3::Xxh3;

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.tick);

        let round = &self.state.round;
        hasher.write_u32(round.score);
        hasher.write_u8(round.lives);
        hasher.write_u32(round.pickups_remaining);
        hasher.write_u32(round.vulnerability_ticks);
        hasher.write_u8(match round.outcome {
            None => 0,
            Some(RunOutcome::Victory) => 1,
            Some(RunOutcome::Defeat) => 2,
        });

        let player = &self.state.player;
        write_body(&mut hasher, &player.body);
        hasher.write_u8(heading_code(player.desired));

        for adversary in self.state.adversaries.values() {
            write_body(&mut hasher, &adversary.body);
            hasher.write_u8(u8::from(adversary.vulnerable));
        }
        hasher.finish()
    }
}

fn write_body(hasher: &mut Xxh3, body: &MobileEntity) {
    hasher.write_u64(body.pos.x.to_bits());
    hasher.write_u64(body.pos.y.to_bits());
    hasher.write_u8(heading_code(body.heading));
}

fn heading_code(heading: Option<Direction>) -> u8 {
    match heading {
        None => 0,
        Some(Direction::Up) => 1,
        Some(Direction::Down) => 2,
        Some(Direction::Left) => 3,
        Some(Direction::Right) => 4,
    }
}
