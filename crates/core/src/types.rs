use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct AdversaryId;
}

/// Integer grid cell. `y` grows downward, `x` grows rightward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn step(self, direction: Direction) -> Pos {
        let (dx, dy) = direction.delta();
        Pos { y: self.y + dy, x: self.x + dx }
    }

    /// Cell reached by `heading`, or the cell itself when stopped.
    pub fn ahead(self, heading: Option<Direction>) -> Pos {
        match heading {
            Some(direction) => self.step(direction),
            None => self,
        }
    }
}

/// Fractional grid position used while an entity travels between cells.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn from_cell(pos: Pos) -> Self {
        Self { x: f64::from(pos.x), y: f64::from(pos.y) }
    }

    pub fn distance(self, other: Vec2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Nearest cell, rounding halves toward positive infinity.
    pub fn nearest_cell(self) -> Pos {
        Pos { y: round_half_up(self.y) as i32, x: round_half_up(self.x) as i32 }
    }
}

pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Turn-candidate order used by adversaries.
    pub const ALL: [Direction; 4] =
        [Direction::Down, Direction::Up, Direction::Right, Direction::Left];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn reversed(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Wall,
    Open,
    Pickup,
    BonusPickup,
}

impl CellKind {
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '#' => Some(CellKind::Wall),
            ' ' => Some(CellKind::Open),
            '.' => Some(CellKind::Pickup),
            'o' => Some(CellKind::BonusPickup),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            CellKind::Wall => '#',
            CellKind::Open => ' ',
            CellKind::Pickup => '.',
            CellKind::BonusPickup => 'o',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsumeOutcome {
    Nothing,
    Pickup,
    BonusPickup,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AdversaryTag {
    Red,
    Pink,
    Cyan,
    Orange,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    Victory,
    Defeat,
}

#[derive(Clone, Debug)]
pub enum AdvanceStopReason {
    Finished(RunOutcome),
    BudgetExhausted,
}

#[derive(Clone, Debug)]
pub struct AdvanceResult {
    pub simulated_ticks: u32,
    pub stop_reason: AdvanceStopReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    RoundFinished,
    InvalidRules(&'static str),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::RoundFinished => write!(f, "the round has already finished"),
            GameError::InvalidRules(reason) => write!(f, "invalid rules: {reason}"),
        }
    }
}

impl Error for GameError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    PickupConsumed { cell: Pos },
    BonusPickupConsumed { cell: Pos },
    VulnerabilityEnded,
    TunnelWrapped { adversary: Option<AdversaryId> },
    AdversaryCaptured { adversary: AdversaryId },
    PlayerCaught { adversary: AdversaryId, lives_left: u8 },
    RoundFinished { outcome: RunOutcome },
}
