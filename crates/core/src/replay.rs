//! Headless re-execution of an input journal against a layout.

use std::error::Error;
use std::fmt;

use crate::game::Game;
use crate::journal::{InputJournal, JOURNAL_FORMAT_VERSION};
use crate::layout::Layout;
use crate::types::{GameError, RunOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    UnsupportedVersion(u16),
    InvalidRules(GameError),
    /// Sequence numbers must increase and tick boundaries must not go backwards.
    InputOutOfOrder { seq: u64 },
    InputRejected { seq: u64, error: GameError },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayError::UnsupportedVersion(version) => {
                write!(f, "unsupported journal format version {version}")
            }
            ReplayError::InvalidRules(error) => write!(f, "journal rules rejected: {error}"),
            ReplayError::InputOutOfOrder { seq } => write!(f, "input {seq} is out of order"),
            ReplayError::InputRejected { seq, error } => {
                write!(f, "input {seq} was rejected: {error}")
            }
        }
    }
}

impl Error for ReplayError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayResult {
    pub outcome: Option<RunOutcome>,
    pub final_tick: u64,
    pub final_snapshot_hash: u64,
    pub score: u32,
}

/// Replays `journal` until the round finishes or `max_ticks` ticks have run.
/// Inputs whose tick boundary lies beyond `max_ticks` are not applied.
pub fn replay(
    layout: &Layout,
    journal: &InputJournal,
    max_ticks: u64,
) -> Result<ReplayResult, ReplayError> {
    if journal.format_version != JOURNAL_FORMAT_VERSION {
        return Err(ReplayError::UnsupportedVersion(journal.format_version));
    }
    let mut game =
        Game::new(journal.seed, layout, journal.rules.clone()).map_err(ReplayError::InvalidRules)?;

    check_order(journal)?;

    let due = journal.inputs.iter().take_while(|record| record.tick_boundary <= max_ticks);
    for record in due {
        run_until(&mut game, record.tick_boundary);
        game.set_desired_heading(record.heading)
            .map_err(|error| ReplayError::InputRejected { seq: record.seq, error })?;
    }

    run_until(&mut game, max_ticks);
    Ok(ReplayResult {
        outcome: game.outcome(),
        final_tick: game.current_tick(),
        final_snapshot_hash: game.snapshot_hash(),
        score: game.state().round.score,
    })
}

fn check_order(journal: &InputJournal) -> Result<(), ReplayError> {
    for pair in journal.inputs.windows(2) {
        let (earlier, later) = (pair[0], pair[1]);
        if later.seq <= earlier.seq || later.tick_boundary < earlier.tick_boundary {
            return Err(ReplayError::InputOutOfOrder { seq: later.seq });
        }
    }
    Ok(())
}

fn run_until(game: &mut Game, tick: u64) {
    while game.current_tick() < tick && game.outcome().is_none() {
        let remaining = tick - game.current_tick();
        game.advance(u32::try_from(remaining).unwrap_or(u32::MAX));
    }
}
