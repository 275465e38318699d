//! Grid motion rules shared by every mobile entity.
//! Alignment, snapping, stepping and the horizontal tunnel live here; heading
//! decisions belong to the player and adversary controllers.

use crate::state::MobileEntity;
use crate::types::{Pos, Vec2, round_half_up};

/// Keeps an entity that has just left a cell from re-reading as aligned with it
/// when `cell + speed - cell` rounds below `speed`.
const ALIGN_SLACK: f64 = 1e-9;
const TUNNEL_EDGE: f64 = 0.5;
const TUNNEL_REENTRY_INSET: f64 = 0.01;

/// True when both coordinates are within one tick's motion of a whole cell.
pub(crate) fn is_aligned(pos: Vec2, speed: f64) -> bool {
    let tolerance = speed - ALIGN_SLACK;
    (pos.x - round_half_up(pos.x)).abs() < tolerance
        && (pos.y - round_half_up(pos.y)).abs() < tolerance
}

/// Snaps an aligned entity onto its cell and returns that cell.
pub(crate) fn snap_if_aligned(body: &mut MobileEntity) -> Option<Pos> {
    if !is_aligned(body.pos, body.speed) {
        return None;
    }
    let cell = body.pos.nearest_cell();
    body.pos = Vec2::from_cell(cell);
    Some(cell)
}

pub(crate) fn step(body: &mut MobileEntity) {
    let Some(direction) = body.heading else {
        return;
    };
    let (dx, dy) = direction.delta();
    body.pos.x += f64::from(dx) * body.speed;
    body.pos.y += f64::from(dy) * body.speed;
}

/// Moves an entity that left through one side of the grid to the other side.
/// Returns whether it wrapped.
pub(crate) fn wrap_tunnel(body: &mut MobileEntity, width: usize) -> bool {
    let far_edge = width as f64 - TUNNEL_EDGE;
    if body.pos.x < -TUNNEL_EDGE {
        body.pos.x = far_edge - TUNNEL_REENTRY_INSET;
        true
    } else if body.pos.x > far_edge {
        body.pos.x = -TUNNEL_EDGE + TUNNEL_REENTRY_INSET;
        true
    } else {
        false
    }
}
