//! Input journal: the seed, the rules and every accepted heading change of a round.
//! Together with a layout this is enough to reproduce the round exactly.

use serde::{Deserialize, Serialize};

use crate::rules::Rules;
use crate::types::Direction;

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u64,
    #[serde(default)]
    pub rules: Rules,
    pub inputs: Vec<InputRecord>,
}

/// A heading request applied when the game reaches `tick_boundary`, before that tick runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub tick_boundary: u64,
    pub heading: Direction,
}

impl InputJournal {
    pub fn new(seed: u64, rules: Rules) -> Self {
        Self { format_version: JOURNAL_FORMAT_VERSION, seed, rules, inputs: Vec::new() }
    }

    /// Appends a heading request and returns its sequence number.
    pub fn append_heading(&mut self, tick_boundary: u64, heading: Direction) -> u64 {
        let seq = self.inputs.last().map_or(0, |record| record.seq + 1);
        self.inputs.push(InputRecord { seq, tick_boundary, heading });
        seq
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
