use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Convenient result alias for the labyrinth library.
pub type Result<T> = std::result::Result<T, Error>;

/// Border of the grid that holds an entrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when the grid text contains no cells at all.
    #[error("maze grid is empty")]
    EmptyGrid,

    /// Raised when a grid row does not match the width of the first row.
    #[error("maze row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Raised when the grid is too small to hold a vertex and two entrances.
    #[error("maze size {height}x{width} is too small; at least 3x3 is required")]
    DegenerateSize { height: usize, width: usize },

    /// Raised when no opening could be found on one of the borders.
    #[error("no entrance found on the {side} border")]
    MissingEntrance { side: Side },

    /// Raised when a border opening does not lead into the maze.
    #[error("entrance on the {side} border at row {row} is blocked by a wall")]
    BlockedEntrance { side: Side, row: usize },

    /// Raised when the edge weight range for generation cannot produce positive weights.
    #[error("invalid edge weight range {min}..={max}; weights must satisfy 1 <= min <= max")]
    InvalidWeightRange { min: u32, max: u32 },

    /// Raised when the two entrances are not connected.
    #[error("no path found between the maze entrances")]
    NoPath,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
