use serde::Serialize;
use slotmap::SlotMap;

use crate::types::*;

/// Player token radius in cells, used when drawing the player.
pub const PLAYER_RADIUS: f32 = 0.4;

#[derive(Clone, Debug, PartialEq)]
pub struct Map {
    width: usize,
    height: usize,
    cells: Vec<CellKind>,
}

impl Map {
    /// Builds a map from row-major cells. `cells.len()` must equal `width * height`.
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<CellKind>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { width, height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.height
    }

    /// Out-of-range cells read as walls.
    pub fn tile_at(&self, pos: Pos) -> CellKind {
        if !self.in_bounds(pos) {
            return CellKind::Wall;
        }
        self.cells[self.index(pos)]
    }

    pub fn is_wall(&self, pos: Pos) -> bool {
        if pos.y < 0 || pos.y as usize >= self.height {
            return true;
        }
        if self.is_tunnel_seam(pos) {
            return false;
        }
        self.tile_at(pos) == CellKind::Wall
    }

    /// A row whose first and last cells are both passable links its two edges.
    pub fn is_tunnel_row(&self, y: i32) -> bool {
        if self.width == 0 {
            return false;
        }
        let last = self.width as i32 - 1;
        self.tile_at(Pos { y, x: 0 }) != CellKind::Wall
            && self.tile_at(Pos { y, x: last }) != CellKind::Wall
    }

    fn is_tunnel_seam(&self, pos: Pos) -> bool {
        (pos.x == -1 || pos.x == self.width as i32) && self.is_tunnel_row(pos.y)
    }

    pub fn consume(&mut self, pos: Pos) -> ConsumeOutcome {
        if !self.in_bounds(pos) {
            return ConsumeOutcome::Nothing;
        }
        let idx = self.index(pos);
        match self.cells[idx] {
            CellKind::Pickup => {
                self.cells[idx] = CellKind::Open;
                ConsumeOutcome::Pickup
            }
            CellKind::BonusPickup => {
                self.cells[idx] = CellKind::Open;
                ConsumeOutcome::BonusPickup
            }
            CellKind::Wall | CellKind::Open => ConsumeOutcome::Nothing,
        }
    }

    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|cell| **cell == kind).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellKind]> {
        self.cells.chunks(self.width.max(1))
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

/// Motion state shared by the player and the adversaries.
#[derive(Clone, Debug, PartialEq)]
pub struct MobileEntity {
    pub pos: Vec2,
    pub heading: Option<Direction>,
    pub speed: f64,
}

impl MobileEntity {
    pub fn at_cell(cell: Pos, heading: Option<Direction>, speed: f64) -> Self {
        Self { pos: Vec2::from_cell(cell), heading, speed }
    }

    pub fn cell(&self) -> Pos {
        self.pos.nearest_cell()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub body: MobileEntity,
    /// Queued turn, applied at the first alignment where it is legal.
    pub desired: Option<Direction>,
    pub spawn: Pos,
}

impl Player {
    pub fn reset_to_spawn(&mut self) {
        self.body.pos = Vec2::from_cell(self.spawn);
        self.body.heading = None;
        self.desired = None;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Adversary {
    pub id: AdversaryId,
    pub tag: AdversaryTag,
    pub body: MobileEntity,
    pub vulnerable: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundState {
    pub score: u32,
    pub lives: u8,
    pub pickups_remaining: u32,
    /// Shared countdown; adversaries revert when it reaches zero.
    pub vulnerability_ticks: u32,
    pub outcome: Option<RunOutcome>,
}

impl RoundState {
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Records the terminal outcome. The first outcome wins.
    pub fn finish(&mut self, outcome: RunOutcome) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        self.outcome = Some(outcome);
        true
    }
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub map: Map,
    pub player: Player,
    pub adversaries: SlotMap<AdversaryId, Adversary>,
    pub adversary_spawn: Pos,
    pub round: RoundState,
}

/// Read-only view handed to renderers after a tick completes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub tick: u64,
    pub player: EntitySnapshot,
    pub adversaries: Vec<AdversarySnapshot>,
    pub score: u32,
    pub lives: u8,
    pub pickups_remaining: u32,
    pub vulnerability_ticks: u32,
    pub finished: bool,
    pub outcome: Option<RunOutcome>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EntitySnapshot {
    pub pos: Vec2,
    pub heading: Option<Direction>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AdversarySnapshot {
    pub tag: AdversaryTag,
    pub pos: Vec2,
    pub heading: Option<Direction>,
    pub vulnerable: bool,
}

impl GameState {
    pub fn snapshot(&self, tick: u64) -> GameSnapshot {
        GameSnapshot {
            tick,
            player: EntitySnapshot {
                pos: self.player.body.pos,
                heading: self.player.body.heading,
            },
            adversaries: self
                .adversaries
                .values()
                .map(|adversary| AdversarySnapshot {
                    tag: adversary.tag,
                    pos: adversary.body.pos,
                    heading: adversary.body.heading,
                    vulnerable: adversary.vulnerable,
                })
                .collect(),
            score: self.round.score,
            lives: self.round.lives,
            pickups_remaining: self.round.pickups_remaining,
            vulnerability_ticks: self.round.vulnerability_ticks,
            finished: self.round.is_finished(),
            outcome: self.round.outcome,
        }
    }
}
