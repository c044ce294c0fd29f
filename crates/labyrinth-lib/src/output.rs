use serde::Serialize;

use crate::error::Side;
use crate::graph::{border_openings, Weight};
use crate::grid::{Cell, Coordinate, Grid};
use crate::solve::{DistanceAlgorithm, Solution};

/// Structured description of a maze grid for serialisation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MazeSummary {
    pub height: usize,
    pub width: usize,
    pub passages: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_entrance: Option<Coordinate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_entrance: Option<Coordinate>,
    pub solved: bool,
    pub grid: Vec<String>,
}

impl MazeSummary {
    pub fn from_grid(grid: &Grid) -> Self {
        let opening = |side: Side, col: usize| {
            border_openings(grid, side)
                .first()
                .map(|&row| Coordinate::new(row, col))
        };

        Self {
            height: grid.height(),
            width: grid.width(),
            passages: grid.count(Cell::Passage) + grid.count(Cell::Path),
            left_entrance: opening(Side::Left, 0),
            right_entrance: opening(Side::Right, grid.width().saturating_sub(1)),
            solved: grid.is_solved(),
            grid: grid.lines(),
        }
    }
}

/// Structured description of a solved maze.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SolutionSummary {
    pub algorithm: DistanceAlgorithm,
    pub length: Weight,
    pub segments: usize,
    pub path: Vec<Coordinate>,
    pub grid: Vec<String>,
}

impl SolutionSummary {
    /// Combine a solution with the annotated grid it was drawn on.
    pub fn new(solution: &Solution, annotated: &Grid) -> Self {
        Self {
            algorithm: solution.algorithm,
            length: solution.length,
            segments: solution.segment_count(),
            path: solution.path.clone(),
            grid: annotated.lines(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reports_openings() {
        let grid: Grid = "11111\n00001\n11101\n10000\n11111".parse().unwrap();
        let summary = MazeSummary::from_grid(&grid);
        assert_eq!(summary.left_entrance, Some(Coordinate::new(1, 0)));
        assert_eq!(summary.right_entrance, Some(Coordinate::new(3, 4)));
        assert!(!summary.solved);
        assert_eq!(summary.grid.len(), 5);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["left_entrance"]["row"], 1);
    }
}
