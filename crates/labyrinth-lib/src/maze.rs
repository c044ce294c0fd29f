use std::str::FromStr;

use tracing::debug;

use crate::carve::{generate_maze, GeneratorConfig};
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::solve::{annotate, solve_grid, DistanceAlgorithm, Solution};

/// Outcome of [`Maze::find_escape`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// The grid now carries the escape path.
    Solved(Solution),
    /// The grid already contained a path; nothing was changed.
    AlreadySolved,
}

/// A maze grid together with its solve state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
}

impl Maze {
    /// Carve a new maze of the given size.
    pub fn generate(height: usize, width: usize, config: &GeneratorConfig) -> Result<Self> {
        let generated = generate_maze(height, width, config)?;
        Ok(Self {
            grid: generated.grid,
        })
    }

    pub fn from_grid(grid: Grid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn is_solved(&self) -> bool {
        self.grid.is_solved()
    }

    /// Find the escape path and mark it on the grid.
    ///
    /// A grid that already holds path markers is left untouched. On error the
    /// grid is unchanged as well.
    pub fn find_escape(&mut self, algorithm: DistanceAlgorithm) -> Result<SolveOutcome> {
        if self.is_solved() {
            debug!("maze already solved; skipping");
            return Ok(SolveOutcome::AlreadySolved);
        }

        let solution = solve_grid(&self.grid, algorithm)?;
        annotate(&mut self.grid, &solution);
        Ok(SolveOutcome::Solved(solution))
    }
}

impl FromStr for Maze {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Ok(Self::from_grid(text.parse()?))
    }
}
