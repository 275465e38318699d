//! Static board description: the cell grid, spawn cells and the adversary roster.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::state::Map;
use crate::types::{AdversaryTag, CellKind, Direction, Pos};

const CLASSIC_ROWS: [&str; 21] = [
    "###################",
    "#........#........#",
    "#o##.###.#.###.##o#",
    "#.................#",
    "#.##.#.#####.#.##.#",
    "#....#...#...#....#",
    "####.##.###.##.####",
    "####.#.......#.####",
    "####.#.## ##.#.####",
    "    ...#   #...    ",
    "####.#.## ##.#.####",
    "####.#.......#.####",
    "####.#.#####.#.####",
    "#........#........#",
    "#o##.###.#.###.##o#",
    "#....#.......#....#",
    "##.#.#.#####.#.#.##",
    "#........#........#",
    "#.######.#.######.#",
    "#.................#",
    "###################",
];

/// Serializable layout description, as found in layout files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSpec {
    pub rows: Vec<String>,
    pub player_spawn: Pos,
    pub adversary_spawn: Pos,
    #[serde(default)]
    pub adversaries: Vec<AdversaryStart>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdversaryStart {
    pub pos: Pos,
    pub heading: Option<Direction>,
    pub tag: AdversaryTag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    Empty,
    RaggedRow { row: usize, expected: usize, found: usize },
    UnknownGlyph { row: usize, column: usize, glyph: char },
    SpawnBlocked { what: &'static str, pos: Pos },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::Empty => write!(f, "layout has no cells"),
            LayoutError::RaggedRow { row, expected, found } => {
                write!(f, "row {row} has {found} cells, expected {expected}")
            }
            LayoutError::UnknownGlyph { row, column, glyph } => {
                write!(f, "unknown cell glyph {glyph:?} at row {row}, column {column}")
            }
            LayoutError::SpawnBlocked { what, pos } => {
                write!(f, "{what} at ({}, {}) is outside the grid or on a wall", pos.x, pos.y)
            }
        }
    }
}

impl Error for LayoutError {}

/// A validated layout. Spawn cells are guaranteed to be in range and passable.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub(crate) map: Map,
    pub(crate) player_spawn: Pos,
    pub(crate) adversary_spawn: Pos,
    pub(crate) adversaries: Vec<AdversaryStart>,
}

impl Layout {
    /// The 21x19 board with four adversaries around the central pen.
    pub fn classic() -> Self {
        Self::from_spec(&classic_spec()).expect("classic layout is well-formed")
    }

    pub fn from_spec(spec: &LayoutSpec) -> Result<Self, LayoutError> {
        let map = parse_rows(&spec.rows)?;

        ensure_passable(&map, "player spawn", spec.player_spawn)?;
        ensure_passable(&map, "adversary spawn", spec.adversary_spawn)?;
        for start in &spec.adversaries {
            ensure_passable(&map, "adversary start", start.pos)?;
        }

        Ok(Self {
            map,
            player_spawn: spec.player_spawn,
            adversary_spawn: spec.adversary_spawn,
            adversaries: spec.adversaries.clone(),
        })
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn player_spawn(&self) -> Pos {
        self.player_spawn
    }

    pub fn adversary_spawn(&self) -> Pos {
        self.adversary_spawn
    }

    pub fn adversaries(&self) -> &[AdversaryStart] {
        &self.adversaries
    }
}

pub fn classic_spec() -> LayoutSpec {
    let start = |x, y, heading, tag| AdversaryStart {
        pos: Pos { y, x },
        heading: Some(heading),
        tag,
    };
    LayoutSpec {
        rows: CLASSIC_ROWS.iter().map(|row| row.to_string()).collect(),
        player_spawn: Pos { y: 15, x: 9 },
        adversary_spawn: Pos { y: 9, x: 9 },
        adversaries: vec![
            start(8, 9, Direction::Right, AdversaryTag::Red),
            start(9, 9, Direction::Left, AdversaryTag::Pink),
            start(10, 9, Direction::Right, AdversaryTag::Cyan),
            start(9, 8, Direction::Left, AdversaryTag::Orange),
        ],
    }
}

fn parse_rows(rows: &[String]) -> Result<Map, LayoutError> {
    let width = rows.first().map_or(0, |row| row.chars().count());
    if width == 0 {
        return Err(LayoutError::Empty);
    }

    let mut cells = Vec::with_capacity(width * rows.len());
    for (row_index, row) in rows.iter().enumerate() {
        let found = row.chars().count();
        if found != width {
            return Err(LayoutError::RaggedRow { row: row_index, expected: width, found });
        }
        for (column, glyph) in row.chars().enumerate() {
            let cell = CellKind::from_glyph(glyph).ok_or(LayoutError::UnknownGlyph {
                row: row_index,
                column,
                glyph,
            })?;
            cells.push(cell);
        }
    }

    Ok(Map::from_cells(width, rows.len(), cells))
}

fn ensure_passable(map: &Map, what: &'static str, pos: Pos) -> Result<(), LayoutError> {
    if !map.in_bounds(pos) || map.tile_at(pos) == CellKind::Wall {
        return Err(LayoutError::SpawnBlocked { what, pos });
    }
    Ok(())
}
