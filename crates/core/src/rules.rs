//! Tunable round constants.
//! Every field has a default, so a rules file only needs the values it changes.

use serde::{Deserialize, Serialize};

use crate::types::GameError;

const MAX_SPEED: f64 = 0.5;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Cells per tick.
    pub player_speed: f64,
    pub adversary_speed: f64,
    pub vulnerable_adversary_speed: f64,
    pub vulnerability_ticks: u32,
    pub pickup_score: u32,
    pub bonus_pickup_score: u32,
    pub capture_score: u32,
    /// Player/adversary distance below which they collide, in cells.
    pub capture_distance: f64,
    pub starting_lives: u8,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            player_speed: 1.0 / 8.0,
            adversary_speed: 1.0 / 10.0,
            vulnerable_adversary_speed: 1.0 / 16.0,
            vulnerability_ticks: 300,
            pickup_score: 10,
            bonus_pickup_score: 50,
            capture_score: 200,
            capture_distance: 0.8,
            starting_lives: 3,
        }
    }
}

impl Rules {
    pub fn validate(&self) -> Result<(), GameError> {
        for speed in [self.player_speed, self.adversary_speed, self.vulnerable_adversary_speed] {
            // Above half a cell per tick the alignment window overlaps the next cell.
            if !(speed > 0.0 && speed <= MAX_SPEED) {
                return Err(GameError::InvalidRules("speeds must be in (0, 0.5]"));
            }
        }
        if !(self.capture_distance > 0.0 && self.capture_distance < 1.0) {
            return Err(GameError::InvalidRules("capture_distance must be in (0, 1)"));
        }
        if self.vulnerability_ticks == 0 {
            return Err(GameError::InvalidRules("vulnerability_ticks must be at least 1"));
        }
        if self.starting_lives == 0 {
            return Err(GameError::InvalidRules("starting_lives must be at least 1"));
        }
        Ok(())
    }

    pub fn adversary_speed_for(&self, vulnerable: bool) -> f64 {
        if vulnerable { self.vulnerable_adversary_speed } else { self.adversary_speed }
    }
}
