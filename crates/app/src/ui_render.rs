//! Rendering for the board, the HUD strip, and the event log panel.

use crate::game_layout::{BoardGeometry, FrameLayout, PanelRect};
use crate::ui_text::{
    finished_recap_lines, hud_line, overlay_text, recent_event_lines, status_text,
};
use macroquad::prelude::*;
use maze_chase::app_loop::{AppMode, AppState};
use maze_core::state::PLAYER_RADIUS;
use maze_core::{AdversaryTag, CellKind, Game, Map, RunOutcome};

const BORDER_COLOR: Color = Color { r: 0.2, g: 0.2, b: 0.2, a: 1.0 };
const BORDER_THICKNESS: f32 = 1.0;
const WALL_COLOR: Color = Color { r: 0.13, g: 0.13, b: 0.85, a: 1.0 };
const VULNERABLE_COLOR: Color = Color { r: 0.1, g: 0.1, b: 0.55, a: 1.0 };
const OVERLAY_SHADE: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.7 };
const PANEL_PAD_X: f32 = 10.0;
const PANEL_PAD_Y: f32 = 22.0;
const LINE_STEP: f32 = 18.0;
const LOG_FONT_SIZE: f32 = 16.0;
const EVENT_LOG_LIMIT: usize = 24;

/// Radii as a fraction of the tile size.
const ADVERSARY_RADIUS: f32 = 0.45;
const PICKUP_RADIUS: f32 = 0.1;
const BONUS_PICKUP_RADIUS: f32 = 0.3;

pub fn draw_frame(game: &Game, app_state: &AppState, layout: &FrameLayout, ui_scale: f32) {
    draw_panel_borders(layout, ui_scale);
    draw_hud(game, app_state, layout.hud, ui_scale);
    draw_event_log(game, layout.event_log, ui_scale);

    let map = &game.state().map;
    let geometry = BoardGeometry::fit(layout.board, map.width(), map.height());
    draw_board(map, geometry);
    draw_entities(game, geometry);

    if let AppMode::Finished(outcome) = app_state.mode {
        draw_finish_overlay(game, outcome, layout.board, ui_scale);
    }
}

fn draw_panel_borders(layout: &FrameLayout, ui_scale: f32) {
    for panel in [layout.hud, layout.board, layout.event_log] {
        draw_rectangle_lines(
            panel.x,
            panel.y,
            panel.width,
            panel.height,
            scaled(BORDER_THICKNESS, ui_scale),
            BORDER_COLOR,
        );
    }
}

fn draw_hud(game: &Game, app_state: &AppState, panel: PanelRect, ui_scale: f32) {
    let text_x = panel.x + scaled(PANEL_PAD_X, ui_scale);
    let text_y = panel.y + scaled(PANEL_PAD_Y, ui_scale);
    draw_text(&hud_line(game), text_x, text_y, scaled(20.0, ui_scale), WHITE);

    let status = status_text(&app_state.mode);
    let font_size = scaled(16.0, ui_scale);
    let width = measure_text(&status, None, font_size as u16, 1.0).width;
    let status_x = panel.x + panel.width - width - scaled(PANEL_PAD_X, ui_scale);
    draw_text(&status, status_x, text_y, font_size, LIGHTGRAY);
}

fn draw_board(map: &Map, geometry: BoardGeometry) {
    for (y, row) in map.rows().enumerate() {
        for (x, kind) in row.iter().enumerate() {
            let (cx, cy) = geometry.to_screen(x as f64, y as f64);
            match *kind {
                CellKind::Wall => {
                    let half = geometry.tile / 2.0;
                    draw_rectangle(cx - half, cy - half, geometry.tile, geometry.tile, WALL_COLOR);
                }
                kind => {
                    if let Some(radius) = pickup_radius(kind) {
                        draw_circle(cx, cy, radius * geometry.tile, WHITE);
                    }
                }
            }
        }
    }
}

fn draw_entities(game: &Game, geometry: BoardGeometry) {
    let state = game.state();
    for adversary in state.adversaries.values() {
        let (x, y) = geometry.to_screen(adversary.body.pos.x, adversary.body.pos.y);
        let color = adversary_color(adversary.tag, adversary.vulnerable);
        draw_circle(x, y, ADVERSARY_RADIUS * geometry.tile, color);
    }

    let player = &state.player.body;
    let (x, y) = geometry.to_screen(player.pos.x, player.pos.y);
    draw_circle(x, y, player_radius(geometry.tile), YELLOW);
}

fn draw_event_log(game: &Game, panel: PanelRect, ui_scale: f32) {
    let text_x = panel.x + scaled(PANEL_PAD_X, ui_scale);
    let mut text_y = panel.y + scaled(PANEL_PAD_Y, ui_scale);
    draw_text("Events", text_x, text_y, scaled(18.0, ui_scale), YELLOW);
    text_y += scaled(LINE_STEP, ui_scale);

    let lines = recent_event_lines(game.log(), EVENT_LOG_LIMIT);
    let visible = fit_lines_to_panel(
        &lines,
        panel.height - scaled(LINE_STEP, ui_scale),
        scaled(LINE_STEP, ui_scale),
        scaled(PANEL_PAD_Y, ui_scale),
    );
    for line in visible {
        draw_text(&line, text_x, text_y, scaled(LOG_FONT_SIZE, ui_scale), LIGHTGRAY);
        text_y += scaled(LINE_STEP, ui_scale);
    }
}

fn draw_finish_overlay(
    game: &Game,
    outcome: RunOutcome,
    panel: PanelRect,
    ui_scale: f32,
) {
    draw_rectangle(panel.x, panel.y, panel.width, panel.height, OVERLAY_SHADE);

    let headline = overlay_text(outcome);
    let headline_size = scaled(48.0, ui_scale);
    let headline_width = measure_text(headline, None, headline_size as u16, 1.0).width;
    let centre_x = panel.x + panel.width / 2.0;
    let mut text_y = panel.y + panel.height / 3.0;
    draw_text(headline, centre_x - headline_width / 2.0, text_y, headline_size, YELLOW);

    text_y += scaled(40.0, ui_scale);
    let font_size = scaled(20.0, ui_scale);
    for line in finished_recap_lines(game, outcome) {
        let width = measure_text(&line, None, font_size as u16, 1.0).width;
        draw_text(&line, centre_x - width / 2.0, text_y, font_size, WHITE);
        text_y += scaled(24.0, ui_scale);
    }
}

pub(crate) fn adversary_color(tag: AdversaryTag, vulnerable: bool) -> Color {
    if vulnerable {
        return VULNERABLE_COLOR;
    }
    match tag {
        AdversaryTag::Red => RED,
        AdversaryTag::Pink => PINK,
        AdversaryTag::Cyan => Color { r: 0.0, g: 1.0, b: 1.0, a: 1.0 },
        AdversaryTag::Orange => ORANGE,
    }
}

pub(crate) fn player_radius(tile: f32) -> f32 {
    PLAYER_RADIUS * tile
}

pub(crate) fn pickup_radius(kind: CellKind) -> Option<f32> {
    match kind {
        CellKind::Pickup => Some(PICKUP_RADIUS),
        CellKind::BonusPickup => Some(BONUS_PICKUP_RADIUS),
        CellKind::Wall | CellKind::Open => None,
    }
}

fn fit_lines_to_panel(
    lines: &[String],
    panel_height: f32,
    line_step: f32,
    panel_pad_y: f32,
) -> Vec<String> {
    if line_step <= 0.0 {
        return Vec::new();
    }

    let usable_height = (panel_height - panel_pad_y).max(0.0);
    let max_lines = (usable_height / line_step).floor() as usize;
    if lines.len() <= max_lines {
        return lines.to_vec();
    }
    if max_lines == 0 {
        return Vec::new();
    }
    if max_lines == 1 {
        return vec![format!("... and {} more", lines.len())];
    }

    let hidden_count = lines.len() - (max_lines - 1);
    let mut fitted_lines = lines[..max_lines - 1].to_vec();
    fitted_lines.push(format!("... and {hidden_count} more"));
    fitted_lines
}

fn scaled(value: f32, ui_scale: f32) -> f32 {
    value * ui_scale
}
