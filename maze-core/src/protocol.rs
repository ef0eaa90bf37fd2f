//! Payload shapes exchanged with the maze service.

use serde::{Deserialize, Serialize};

use crate::cell::{Cell, Coord};
use crate::error::Result;

pub const GRID_ENDPOINT: &str = "laberinto";
pub const PATH_ENDPOINT: &str = "laberinto/camino";
pub const IMAGE_ENDPOINT: &str = "laberinto/imagen";
pub const DIRECTORY_ENDPOINT: &str = "directorio";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadRequest {
    pub height: usize,
    pub width: usize,
}

impl LoadRequest {
    pub fn query_string(&self) -> String {
        format!("alto={}&ancho={}", self.height, self.width)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Endpoints in the grid source's own coordinates, see
/// [`GridState::source_coord`](crate::grid::GridState::source_coord).
pub struct PathRequest {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryRequest {
    pub dir: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryAccepted {
    #[serde(rename = "directorio")]
    pub directory: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryFailure {
    #[serde(default)]
    pub error: String,
}

pub fn parse_grid(text: &str) -> Result<Vec<Vec<Cell>>> {
    Ok(serde_json::from_str(text)?)
}

/// Solver answers with whole cell records; only the coordinates matter here.
pub fn parse_path(text: &str) -> Result<Vec<Coord>> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_request_wire_shape() {
        let req = PathRequest {
            x1: 0,
            y1: 1,
            x2: 2,
            y2: 3,
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"x1":0,"y1":1,"x2":2,"y2":3}"#
        );
    }

    #[test]
    fn load_query() {
        let req = LoadRequest {
            height: 12,
            width: 30,
        };
        assert_eq!(req.query_string(), "alto=12&ancho=30");
    }

    #[test]
    fn path_ignores_extra_fields() {
        let path = parse_path(r#"[{"x":0,"y":0,"norte":true},{"x":1,"y":0,"sur":false}]"#).unwrap();
        assert_eq!(path, vec![Coord { x: 0, y: 0 }, Coord { x: 1, y: 0 }]);
    }

    #[test]
    fn directory_payloads() {
        let ok: DirectoryAccepted = serde_json::from_str(r#"{"directorio":"/tmp/out"}"#).unwrap();
        assert_eq!(ok.directory, "/tmp/out");
        let bad: DirectoryFailure =
            serde_json::from_str(r#"{"error":"El directorio no es válido"}"#).unwrap();
        assert!(!bad.error.is_empty());
        assert!(parse_grid("{").is_err());
    }
}
