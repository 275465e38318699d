pub mod app_loop;
pub mod launch;
pub mod ui_scale;

use maze_core::RunOutcome;

pub const APP_NAME: &str = "Maze Chase";

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}

/// Map a `RunOutcome` to its reason code string.
pub fn reason_code(outcome: &RunOutcome) -> &'static str {
    match outcome {
        RunOutcome::Victory => "WIN_CLEAR",
        RunOutcome::Defeat => "LIVES_ZERO",
    }
}
