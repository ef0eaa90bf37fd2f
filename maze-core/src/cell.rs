use serde::{Deserialize, Serialize};

/// One maze position. A direction flag is `true` when the passage that way is
/// open; `false` means a wall.
///
/// The grid source speaks Spanish on the wire (`norte`, `sur`, `este`,
/// `oeste`), so those names are accepted as aliases. Overlay flags are never
/// part of the source data and default to `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    #[serde(alias = "norte")]
    pub north: bool,
    #[serde(alias = "sur")]
    pub south: bool,
    #[serde(alias = "este")]
    pub east: bool,
    #[serde(alias = "oeste")]
    pub west: bool,
    // overlay flags
    #[serde(rename = "isStart", alias = "inicio")]
    pub is_start: bool,
    #[serde(rename = "isEnd", alias = "fin")]
    pub is_end: bool,
    #[serde(rename = "onPath", alias = "camino")]
    pub on_path: bool,
}

impl Cell {
    /// A fully walled cell with no overlay flags.
    pub fn new(x: usize, y: usize) -> Self {
        Cell {
            x,
            y,
            ..Default::default()
        }
    }

    pub fn has_overlay(&self) -> bool {
        self.is_start || self.is_end || self.on_path
    }

    /// Same walls and position, overlay flags cleared.
    pub fn cleared(self) -> Self {
        Cell {
            is_start: false,
            is_end: false,
            on_path: false,
            ..self
        }
    }
}

/// A coordinate as reported by the path solver. Signed because the solver is
/// an external collaborator and may answer with positions this grid does not
/// have; those are skipped rather than trusted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl From<(i64, i64)> for Coord {
    fn from(v: (i64, i64)) -> Self {
        Coord { x: v.0, y: v.1 }
    }
}
