use macroquad::prelude::KeyCode;
use maze_core::{AdvanceStopReason, Direction, Game, InputJournal, RunOutcome};

/// A heading change that was accepted by the simulation this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptedInput {
    pub tick_boundary: u64,
    pub heading: Direction,
}

#[derive(Debug, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Playing,
    Paused,
    Finished(RunOutcome),
}

#[derive(Default)]
pub struct AppState {
    pub mode: AppMode,
    /// Inputs accepted during the current frame's `tick()` call.
    /// Drained by the caller after each tick to extend the round's journal.
    pub accepted_inputs: Vec<AcceptedInput>,
}

pub fn heading_for_key(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::Up | KeyCode::W => Some(Direction::Up),
        KeyCode::Down | KeyCode::S => Some(Direction::Down),
        KeyCode::Left | KeyCode::A => Some(Direction::Left),
        KeyCode::Right | KeyCode::D => Some(Direction::Right),
        _ => None,
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process input and logic for a single frame. `keys_pressed` is in press
    /// order, so the last direction key of the frame wins.
    pub fn tick(&mut self, game: &mut Game, keys_pressed: &[KeyCode]) {
        self.accepted_inputs.clear();
        if matches!(self.mode, AppMode::Finished(_)) {
            return;
        }

        if keys_pressed.contains(&KeyCode::Space) {
            self.mode = match self.mode {
                AppMode::Playing => AppMode::Paused,
                _ => AppMode::Playing,
            };
        }

        if let Some(heading) = keys_pressed.iter().rev().find_map(|key| heading_for_key(*key)) {
            self.apply_and_record_heading(game, heading);
        }

        if matches!(self.mode, AppMode::Playing) {
            let result = game.advance(1);
            self.apply_stop_reason(result.stop_reason);
        }
    }

    pub fn apply_stop_reason(&mut self, stop_reason: AdvanceStopReason) {
        match stop_reason {
            AdvanceStopReason::Finished(outcome) => {
                self.mode = AppMode::Finished(outcome);
            }
            AdvanceStopReason::BudgetExhausted => {
                // Continue on the next frame
            }
        }
    }

    /// Appends this frame's accepted inputs to `journal`.
    pub fn drain_into(&mut self, journal: &mut InputJournal) {
        for input in self.accepted_inputs.drain(..) {
            journal.append_heading(input.tick_boundary, input.heading);
        }
    }

    fn apply_and_record_heading(&mut self, game: &mut Game, heading: Direction) {
        let tick = game.current_tick();
        if game.set_desired_heading(heading).is_ok() {
            self.accepted_inputs.push(AcceptedInput { tick_boundary: tick, heading });
        }
    }
}
