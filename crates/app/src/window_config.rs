//! Window configuration for the desktop app.

use macroquad::window::{Conf, screen_dpi_scale};
use maze_chase::APP_NAME;
use maze_chase::ui_scale::UiScale;
use std::env;

const DEFAULT_WINDOW_WIDTH: i32 = 640;
const DEFAULT_WINDOW_HEIGHT: i32 = 520;
const UI_SCALE_ENV: &str = "GAME_UI_SCALE";

pub fn build_window_conf() -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: DEFAULT_WINDOW_WIDTH,
        window_height: DEFAULT_WINDOW_HEIGHT,
        // Linux desktop sessions may not scale low-DPI framebuffers automatically.
        high_dpi: true,
        ..Default::default()
    }
}

pub fn runtime_ui_scale() -> UiScale {
    let dpi_scale = screen_dpi_scale();
    let override_value = env::var(UI_SCALE_ENV).ok();
    let scale = UiScale::resolve(dpi_scale, override_value.as_deref());
    log::debug!(
        "display scale: dpi={dpi_scale:.2} ui={:.2} {UI_SCALE_ENV}={}",
        scale.value(),
        override_value.as_deref().unwrap_or("unset")
    );
    scale
}

#[cfg(test)]
mod tests {
    use super::build_window_conf;

    #[test]
    fn enables_high_dpi_rendering() {
        let conf = build_window_conf();
        assert!(conf.high_dpi);
    }

    #[test]
    fn window_is_titled_after_the_game() {
        let conf = build_window_conf();
        assert_eq!(conf.window_title, "Maze Chase");
        assert_eq!(conf.window_width, 640);
        assert_eq!(conf.window_height, 520);
    }
}
