use thiserror::Error;

use crate::grid::{MAX_DIMENSION, MIN_DIMENSION};

#[derive(Debug, Error)]
pub enum MazeError {
    #[error(
        "invalid maze dimensions {height}x{width}: each side must be within {min}..={max}",
        min = MIN_DIMENSION,
        max = MAX_DIMENSION
    )]
    InvalidDimensions { height: i64, width: i64 },
    #[error("grid source sent a {height}x{width} maze, expected {expected_height}x{expected_width}")]
    GridShape {
        expected_height: usize,
        expected_width: usize,
        height: i64,
        width: i64,
    },
    #[error("maze loading is disabled until an image directory is accepted")]
    LoadingDisabled,
    #[error("directory rejected: {0}")]
    ConfigurationRejected(String),
    #[error("stale response for epoch {issued}, current epoch is {current}")]
    StaleResponse { issued: u64, current: u64 },
    #[error("coordinate ({x}, {y}) is outside the maze")]
    OutOfBoundsCoordinate { x: i64, y: i64 },
    #[error("no maze has been loaded")]
    NotLoaded,
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
}

impl MazeError {
    /// Stale responses are expected under normal use and never shown to the user.
    pub fn is_stale(&self) -> bool {
        matches!(self, MazeError::StaleResponse { .. })
    }
}

pub type Result<T> = std::result::Result<T, MazeError>;
