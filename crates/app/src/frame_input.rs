//! Keyboard input collection for one rendered frame.

use macroquad::prelude::{KeyCode, get_last_key_pressed, is_key_down, is_key_pressed};
use maze_chase::app_loop::heading_for_key;
use maze_chase::ui_scale::UiScaleAction;

const DIRECTION_KEYS: [KeyCode; 8] = [
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::W,
    KeyCode::S,
    KeyCode::A,
    KeyCode::D,
];

#[derive(Default)]
pub struct FrameInput {
    /// Press order within the frame; the most recent direction key is last.
    pub keys_pressed: Vec<KeyCode>,
    pub ui_scale_action: Option<UiScaleAction>,
}

pub fn capture_frame_input() -> FrameInput {
    let ctrl_down = is_key_down(KeyCode::LeftControl) || is_key_down(KeyCode::RightControl);
    let mut keys_pressed = Vec::with_capacity(DIRECTION_KEYS.len() + 1);

    if is_key_pressed(KeyCode::Space) {
        keys_pressed.push(KeyCode::Space);
    }
    if !ctrl_down {
        for key in DIRECTION_KEYS {
            if is_key_pressed(key) {
                keys_pressed.push(key);
            }
        }
        order_last_pressed(&mut keys_pressed, get_last_key_pressed());
    }

    let ui_scale_action = if ctrl_down && is_key_pressed(KeyCode::Equal) {
        Some(UiScaleAction::Increase)
    } else if ctrl_down && is_key_pressed(KeyCode::Minus) {
        Some(UiScaleAction::Decrease)
    } else if ctrl_down && is_key_pressed(KeyCode::Key0) {
        Some(UiScaleAction::Reset)
    } else {
        None
    };

    FrameInput { keys_pressed, ui_scale_action }
}

/// Moves the frame's last direction key to the end so it wins over earlier presses.
fn order_last_pressed(keys: &mut Vec<KeyCode>, last: Option<KeyCode>) {
    let Some(last) = last.filter(|key| heading_for_key(*key).is_some()) else {
        return;
    };
    if let Some(index) = keys.iter().position(|key| *key == last) {
        let key = keys.remove(index);
        keys.push(key);
    }
}
