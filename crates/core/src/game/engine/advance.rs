//! Per-tick simulation loop and stop-reason handling for the game engine.

use super::*;

impl Game {
    /// Runs up to `max_steps` ticks. Once the round has finished this is a no-op
    /// that reports the outcome.
    pub fn advance(&mut self, max_steps: u32) -> AdvanceResult {
        let mut steps = 0;
        while steps < max_steps {
            if let Some(outcome) = self.state.round.outcome {
                return AdvanceResult {
                    simulated_ticks: steps,
                    stop_reason: AdvanceStopReason::Finished(outcome),
                };
            }
            self.step();
            steps += 1;
        }
        if let Some(outcome) = self.state.round.outcome {
            return AdvanceResult {
                simulated_ticks: steps,
                stop_reason: AdvanceStopReason::Finished(outcome),
            };
        }
        AdvanceResult { simulated_ticks: steps, stop_reason: AdvanceStopReason::BudgetExhausted }
    }

    fn step(&mut self) {
        let first_new_event = self.log.len();

        player::step_player(&mut self.state, &self.rules, &mut self.log);
        adversary::tick_vulnerability(&mut self.state, &mut self.log);
        adversary::step_adversaries(&mut self.state, &self.rules, &mut self.rng, &mut self.log);
        collision::resolve_collisions(&mut self.state, &self.rules, &mut self.log);
        collision::check_victory(&mut self.state, &mut self.log);
        self.tick += 1;

        for event in &self.log[first_new_event..] {
            match event {
                LogEvent::RoundFinished { outcome } => log::info!(
                    "round finished at tick {}: {:?}, score {}",
                    self.tick,
                    outcome,
                    self.state.round.score
                ),
                _ => log::debug!("tick {}: {:?}", self.tick, event),
            }
        }
    }
}
