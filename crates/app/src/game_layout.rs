//! Layout model for the on-screen panels: a HUD strip above the board and an event log beside it.

use taffy::TaffyTree;
use taffy::prelude::*;

const HUD_HEIGHT: f32 = 36.0;
const GUTTER: f32 = 12.0;
const EVENT_LOG_WIDTH: f32 = 220.0;

pub struct LayoutNodes {
    root: NodeId,
    hud: NodeId,
    main_row: NodeId,
    board: NodeId,
    event_log: NodeId,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

pub struct FrameLayout {
    pub hud: PanelRect,
    pub board: PanelRect,
    pub event_log: PanelRect,
}

/// Square cells that fit a `columns x rows` grid inside `area`, placed at the area's centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardGeometry {
    pub origin_x: f32,
    pub origin_y: f32,
    pub tile: f32,
}

impl BoardGeometry {
    pub fn fit(area: PanelRect, columns: usize, rows: usize) -> Self {
        let tile = tile_size(area, columns, rows);
        let used_width = tile * columns as f32;
        let used_height = tile * rows as f32;
        Self {
            origin_x: area.x + (area.width - used_width) / 2.0,
            origin_y: area.y + (area.height - used_height) / 2.0,
            tile,
        }
    }

    /// Screen position of a point in cell coordinates; cell centres land mid-tile.
    pub fn to_screen(self, x: f64, y: f64) -> (f32, f32) {
        (
            self.origin_x + (x as f32 + 0.5) * self.tile,
            self.origin_y + (y as f32 + 0.5) * self.tile,
        )
    }
}

pub fn tile_size(area: PanelRect, columns: usize, rows: usize) -> f32 {
    if columns == 0 || rows == 0 {
        return 0.0;
    }
    let fit = (area.width / columns as f32).min(area.height / rows as f32);
    fit.floor().max(1.0)
}

pub fn setup_layout(taffy: &mut TaffyTree<()>) -> LayoutNodes {
    let hud = taffy
        .new_leaf(Style {
            size: Size { width: percent(1.0), height: length(HUD_HEIGHT) },
            margin: taffy::Rect {
                left: zero(),
                right: zero(),
                top: zero(),
                bottom: length(GUTTER),
            },
            flex_shrink: 0.0,
            ..Default::default()
        })
        .expect("hud node");
    let board = taffy.new_leaf(Style { flex_grow: 1.0, ..Default::default() }).expect("board node");
    let event_log = taffy
        .new_leaf(Style {
            size: Size { width: length(EVENT_LOG_WIDTH), height: auto() },
            flex_shrink: 0.0,
            margin: taffy::Rect {
                left: length(GUTTER),
                right: zero(),
                top: zero(),
                bottom: zero(),
            },
            ..Default::default()
        })
        .expect("event log node");
    let main_row = taffy
        .new_with_children(
            Style {
                display: Display::Flex,
                flex_direction: FlexDirection::Row,
                flex_grow: 1.0,
                ..Default::default()
            },
            &[board, event_log],
        )
        .expect("main row node");
    let root = taffy
        .new_with_children(
            Style {
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                size: Size { width: percent(1.0), height: percent(1.0) },
                padding: taffy::Rect {
                    left: length(GUTTER),
                    right: length(GUTTER),
                    top: length(GUTTER),
                    bottom: length(GUTTER),
                },
                ..Default::default()
            },
            &[hud, main_row],
        )
        .expect("root node");
    LayoutNodes { root, hud, main_row, board, event_log }
}

/// Lays out in logical units (viewport divided by `ui_scale`) and returns physical rects.
pub fn compute_frame_layout(
    taffy: &mut TaffyTree<()>,
    nodes: &LayoutNodes,
    viewport_width: f32,
    viewport_height: f32,
    ui_scale: f32,
) -> FrameLayout {
    let available_size = Size {
        width: AvailableSpace::Definite(viewport_width / ui_scale),
        height: AvailableSpace::Definite(viewport_height / ui_scale),
    };
    taffy.compute_layout(nodes.root, available_size).expect("compute layout");

    let l_root = taffy.layout(nodes.root).expect("root layout");
    let l_hud = taffy.layout(nodes.hud).expect("hud layout");
    let l_main = taffy.layout(nodes.main_row).expect("main layout");
    let l_board = taffy.layout(nodes.board).expect("board layout");
    let l_event = taffy.layout(nodes.event_log).expect("event layout");

    FrameLayout {
        hud: panel_rect(l_hud, &[l_root], ui_scale),
        board: panel_rect(l_board, &[l_root, l_main], ui_scale),
        event_log: panel_rect(l_event, &[l_root, l_main], ui_scale),
    }
}

fn panel_rect(layout: &taffy::Layout, parents: &[&taffy::Layout], ui_scale: f32) -> PanelRect {
    let mut x = layout.location.x;
    let mut y = layout.location.y;
    for parent in parents {
        x += parent.location.x;
        y += parent.location.y;
    }

    PanelRect {
        x: x * ui_scale,
        y: y * ui_scale,
        width: layout.size.width * ui_scale,
        height: layout.size.height * ui_scale,
    }
}
