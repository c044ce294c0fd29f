//! Solve command handler for finding and marking the escape path.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use tracing::info;

use labyrinth_lib::{DistanceAlgorithm, Grid, Maze, MazeSummary, SolutionSummary, SolveOutcome};
use labyrinth_cli::output::{print_grid, print_json, print_notice, OutputFormat, OutputOptions};

/// Distance computation selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AlgorithmArg {
    #[default]
    Dijkstra,
    StackWalk,
}

impl From<AlgorithmArg> for DistanceAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Dijkstra => DistanceAlgorithm::Dijkstra,
            AlgorithmArg::StackWalk => DistanceAlgorithm::StackWalk,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    /// Maze file in the text grid format.
    #[arg(long, short = 'i')]
    pub input: PathBuf,

    /// Distance algorithm used before walking the path.
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Dijkstra)]
    pub algorithm: AlgorithmArg,

    /// Write the annotated maze to this file.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Handle the solve subcommand.
pub fn handle_solve(args: &SolveArgs, options: &OutputOptions) -> Result<()> {
    let grid = Grid::load(&args.input)
        .with_context(|| format!("failed to load maze from {}", args.input.display()))?;
    let mut maze = Maze::from_grid(grid);

    let outcome = maze
        .find_escape(args.algorithm.into())
        .with_context(|| format!("failed to solve maze from {}", args.input.display()))?;

    if let Some(path) = &args.output {
        maze.grid()
            .save(path)
            .with_context(|| format!("failed to write maze to {}", path.display()))?;
        info!(path = %path.display(), "annotated maze saved");
    }

    match (outcome, options.format) {
        (SolveOutcome::Solved(solution), OutputFormat::Json) => {
            print_json(&SolutionSummary::new(&solution, maze.grid()))?;
        }
        (SolveOutcome::AlreadySolved, OutputFormat::Json) => {
            print_json(&MazeSummary::from_grid(maze.grid()))?;
        }
        (SolveOutcome::Solved(solution), _) => {
            info!(
                length = solution.length,
                segments = solution.segment_count(),
                "escape path marked"
            );
            print_grid(maze.grid(), options);
        }
        (SolveOutcome::AlreadySolved, _) => {
            print_notice("Maze is already solved", &options.palette);
            print_grid(maze.grid(), options);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_arg_maps_to_library_enum() {
        assert_eq!(
            DistanceAlgorithm::from(AlgorithmArg::default()),
            DistanceAlgorithm::Dijkstra
        );
        assert_eq!(
            DistanceAlgorithm::from(AlgorithmArg::StackWalk),
            DistanceAlgorithm::StackWalk
        );
    }
}
