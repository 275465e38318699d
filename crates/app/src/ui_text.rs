//! Text formatting for the HUD, the finish overlay, recaps, and event log entries.

use maze_chase::app_loop::AppMode;
use maze_chase::{format_seed, format_snapshot_hash, reason_code};
use maze_core::{Game, LogEvent, RunOutcome};

pub fn status_text(mode: &AppMode) -> String {
    match mode {
        AppMode::Playing => "Playing (Space to pause)".to_string(),
        AppMode::Paused => "Paused (Space to resume)".to_string(),
        AppMode::Finished(outcome) => format!("Finished: {}", reason_code(outcome)),
    }
}

pub fn hud_line(game: &Game) -> String {
    let round = &game.state().round;
    let mut line = format!("Score: {}   Lives: {}", round.score, round.lives);
    if round.vulnerability_ticks > 0 {
        line.push_str(&format!("   Power: {}", round.vulnerability_ticks));
    }
    line
}

pub fn overlay_text(outcome: RunOutcome) -> &'static str {
    match outcome {
        RunOutcome::Victory => "You Win!",
        RunOutcome::Defeat => "Game Over",
    }
}

pub fn finished_recap_lines(game: &Game, outcome: RunOutcome) -> Vec<String> {
    vec![
        format!("Reason: {}", reason_code(&outcome)),
        format!("Score: {}", game.state().round.score),
        format!("Seed: {}", format_seed(game.seed())),
        format!("Tick: {}", game.current_tick()),
        format!("Snapshot: {}", format_snapshot_hash(game.snapshot_hash())),
    ]
}

pub fn event_log_line(event: &LogEvent) -> String {
    match event {
        LogEvent::PickupConsumed { cell } => format!("pickup at ({}, {})", cell.x, cell.y),
        LogEvent::BonusPickupConsumed { cell } => {
            format!("bonus pickup at ({}, {})", cell.x, cell.y)
        }
        LogEvent::VulnerabilityEnded => "adversaries recovered".to_string(),
        LogEvent::TunnelWrapped { adversary: None } => "player took the tunnel".to_string(),
        LogEvent::TunnelWrapped { adversary: Some(_) } => "adversary took the tunnel".to_string(),
        LogEvent::AdversaryCaptured { .. } => "adversary captured".to_string(),
        LogEvent::PlayerCaught { lives_left, .. } => format!("caught! lives left: {lives_left}"),
        LogEvent::RoundFinished { outcome } => format!("round over: {}", reason_code(outcome)),
    }
}

/// Latest `limit` log lines, newest first. Per-pickup noise is left out.
pub fn recent_event_lines(events: &[LogEvent], limit: usize) -> Vec<String> {
    events
        .iter()
        .rev()
        .filter(|event| !matches!(event, LogEvent::PickupConsumed { .. }))
        .take(limit)
        .map(event_log_line)
        .collect()
}
