//! Labyrinth library entry points.
//!
//! This crate carves perfect mazes from a randomly weighted lattice graph,
//! reconstructs the decision-point graph of an existing maze grid, and finds
//! the escape path between its two entrances. Higher-level consumers (the
//! CLI) should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod carve;
pub mod edge;
pub mod error;
pub mod graph;
pub mod grid;
pub mod maze;
pub mod output;
pub mod solve;
pub mod tree;

pub use carve::{generate_maze, generate_maze_with_rng, GeneratedMaze, GeneratorConfig};
pub use edge::Edge;
pub use error::{Error, Result, Side};
pub use graph::{
    build_lattice_graph, build_maze_graph, EdgeWeight, Entrance, Entrances, Graph, GraphMode,
    Neighbour, VertexId, Weight, WeightRange,
};
pub use grid::{Cell, Coordinate, Grid};
pub use maze::{Maze, SolveOutcome};
pub use output::{MazeSummary, SolutionSummary};
pub use solve::{
    annotate, distances_from, distances_to_start, escape_path, solve_graph, solve_grid,
    DistanceAlgorithm, Solution,
};
pub use tree::SpanningTree;
