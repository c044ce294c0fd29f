//! Rectangular grid of cell states shared by the carver, the graph builder
//! and the solver.
//!
//! The text interchange format stores one row per line: `'0'` is a passage,
//! `'*'` marks a cell on a solved escape path and every other character is a
//! wall (written back as `'1'`).

use std::fmt;
use std::fs;
use std::ops::{Index, IndexMut};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Character used for walls when writing a grid.
pub const WALL_CHAR: char = '1';
/// Character used for passages.
pub const PASSAGE_CHAR: char = '0';
/// Character used for cells on a solved escape path.
pub const PATH_CHAR: char = '*';

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    Wall,
    Passage,
    /// A passage that lies on a solved escape path.
    Path,
}

impl Cell {
    /// `true` for cells that can be walked through.
    pub fn is_open(self) -> bool {
        matches!(self, Cell::Passage | Cell::Path)
    }

    /// Interchange character for this cell.
    pub fn as_char(self) -> char {
        match self {
            Cell::Wall => WALL_CHAR,
            Cell::Passage => PASSAGE_CHAR,
            Cell::Path => PATH_CHAR,
        }
    }

    /// Parse an interchange character. Unknown characters are walls.
    pub fn from_char(c: char) -> Self {
        match c {
            PASSAGE_CHAR => Cell::Passage,
            PATH_CHAR => Cell::Path,
            _ => Cell::Wall,
        }
    }
}

/// Row/column position within a [`Grid`].
///
/// Ordering is row-major, which matches vertex id assignment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance along a shared row or column.
    pub fn distance_to(&self, other: &Coordinate) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Rectangular array of cell states stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of the given size with every cell set to `cell`.
    pub fn filled(height: usize, width: usize, cell: Cell) -> Self {
        Self {
            height,
            width,
            cells: vec![cell; height * width],
        }
    }

    /// Build a grid from explicit rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(Error::EmptyGrid);
        }

        let height = rows.len();
        let mut cells = Vec::with_capacity(height * width);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(Error::RaggedGrid {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }

        Ok(Self {
            height,
            width,
            cells,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Cell at `coordinate`, or `None` when it lies outside the grid.
    pub fn get(&self, coordinate: Coordinate) -> Option<Cell> {
        if coordinate.row < self.height && coordinate.col < self.width {
            Some(self.cells[coordinate.row * self.width + coordinate.col])
        } else {
            None
        }
    }

    /// `true` when the cell exists and is walkable.
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.get(Coordinate::new(row, col))
            .is_some_and(Cell::is_open)
    }

    pub fn set(&mut self, coordinate: Coordinate, cell: Cell) {
        self[coordinate] = cell;
    }

    /// Iterate over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width.max(1))
    }

    /// Number of cells in the given state.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// A grid is solved once any cell carries the path marker.
    pub fn is_solved(&self) -> bool {
        self.cells.contains(&Cell::Path)
    }

    /// Turn every path marker back into a plain passage.
    pub fn clear_path(&mut self) {
        for cell in &mut self.cells {
            if *cell == Cell::Path {
                *cell = Cell::Passage;
            }
        }
    }

    /// Rows rendered in the interchange format.
    pub fn lines(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.as_char()).collect())
            .collect()
    }

    /// Load a grid from a text file.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading maze grid");
        let text = fs::read_to_string(path)?;
        text.parse()
    }

    /// Write the grid to a text file, one row per line.
    pub fn save(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), height = self.height, width = self.width, "saving maze grid");
        fs::write(path, self.to_string())?;
        Ok(())
    }
}

impl Index<Coordinate> for Grid {
    type Output = Cell;

    fn index(&self, coordinate: Coordinate) -> &Self::Output {
        assert!(
            coordinate.row < self.height && coordinate.col < self.width,
            "coordinate {coordinate} outside {}x{} grid",
            self.height,
            self.width
        );
        &self.cells[coordinate.row * self.width + coordinate.col]
    }
}

impl IndexMut<Coordinate> for Grid {
    fn index_mut(&mut self, coordinate: Coordinate) -> &mut Self::Output {
        assert!(
            coordinate.row < self.height && coordinate.col < self.width,
            "coordinate {coordinate} outside {}x{} grid",
            self.height,
            self.width
        );
        &mut self.cells[coordinate.row * self.width + coordinate.col]
    }
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let mut lines: Vec<&str> = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }

        let rows = lines
            .into_iter()
            .map(|line| line.chars().map(Cell::from_char).collect())
            .collect();
        Grid::from_rows(rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
