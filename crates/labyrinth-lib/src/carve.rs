//! Perfect maze generation.
//!
//! A randomized minimum spanning tree is grown over the lattice graph with a
//! priority queue of candidate edges. Every accepted edge opens the cell
//! between its endpoints, so the open cells form a single tree. Two border
//! openings are added afterwards.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::edge::Edge;
use crate::error::Result;
use crate::graph::{build_lattice_graph, Graph, WeightRange};
use crate::grid::{Cell, Coordinate, Grid};
use crate::tree::SpanningTree;

/// Settings for maze generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Range of random lattice edge weights.
    #[serde(default)]
    pub weights: WeightRange,
    /// Seed for reproducible output. Entropy is used when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Result of carving a maze.
#[derive(Debug, Clone)]
pub struct GeneratedMaze {
    pub grid: Grid,
    /// Opening on the left border.
    pub left_entrance: Coordinate,
    /// Opening on the right border.
    pub right_entrance: Coordinate,
    /// Lattice the maze was carved from.
    pub lattice: Graph,
    pub tree: SpanningTree,
    /// Edges accepted into the tree, in acceptance order.
    pub carved_edges: Vec<Edge>,
}

/// Generate a maze using the configured seed, or entropy when none is set.
pub fn generate_maze(height: usize, width: usize, config: &GeneratorConfig) -> Result<GeneratedMaze> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate_maze_with_rng(height, width, &config.weights, &mut rng)
}

/// Generate a maze drawing every random choice from `rng`.
///
/// The grid keeps the requested size; only the lattice is truncated to odd
/// dimensions. With an even width the right entrance spans the extra column.
pub fn generate_maze_with_rng<R: Rng + ?Sized>(
    height: usize,
    width: usize,
    weights: &WeightRange,
    rng: &mut R,
) -> Result<GeneratedMaze> {
    let lattice = build_lattice_graph(height, width, weights, rng)?;
    let mut grid = Grid::filled(height, width, Cell::Wall);

    let (tree, carved_edges) = grow_spanning_tree(&lattice, &mut grid, rng);
    for &vertex in tree.order() {
        grid.set(lattice.coordinate(vertex), Cell::Passage);
    }

    let (left_entrance, right_entrance) = open_entrances(&mut grid, rng);

    info!(
        height,
        width,
        vertices = lattice.vertex_count(),
        carved = carved_edges.len(),
        left = %left_entrance,
        right = %right_entrance,
        "generated maze"
    );

    Ok(GeneratedMaze {
        grid,
        left_entrance,
        right_entrance,
        lattice,
        tree,
        carved_edges,
    })
}

/// Candidate edge ordered by weight, then by insertion sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueuedEdge {
    edge: Edge,
    sequence: u64,
}

impl Ord for QueuedEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by weight.
        other
            .edge
            .weight
            .cmp(&self.edge.weight)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for QueuedEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Default)]
struct EdgeQueue {
    heap: BinaryHeap<QueuedEdge>,
    sequence: u64,
    pushed: u64,
}

impl EdgeQueue {
    fn push(&mut self, edge: Edge) {
        self.heap.push(QueuedEdge {
            edge,
            sequence: self.sequence,
        });
        self.sequence += 1;
        self.pushed += 1;
    }

    fn pop(&mut self) -> Option<Edge> {
        self.heap.pop().map(|queued| queued.edge)
    }
}

/// Grow the tree from a random root, opening the midpoint of each accepted edge.
///
/// After every pop the lightest remaining edge of both endpoints is queued
/// again, so stale duplicates are expected and dropped when both ends are
/// already in the tree.
fn grow_spanning_tree<R: Rng + ?Sized>(
    graph: &Graph,
    grid: &mut Grid,
    rng: &mut R,
) -> (SpanningTree, Vec<Edge>) {
    let mut tree = SpanningTree::new(graph.vertex_count());
    let mut carved = Vec::with_capacity(graph.vertex_count().saturating_sub(1));
    let mut queue = EdgeQueue::default();

    let root = graph.random_vertex(rng);
    tree.insert(root);
    if let Some(edge) = graph.lightest_edge(root, &tree) {
        queue.push(edge);
    }

    while let Some(edge) = queue.pop() {
        if !edge.contains_both(&tree) {
            grid.set(edge.midpoint(graph), Cell::Passage);
            let added = if tree.contains(edge.from) {
                edge.to
            } else {
                edge.from
            };
            tree.insert(added);
            carved.push(edge);
        }

        for endpoint in [edge.from, edge.to] {
            if let Some(next) = graph.lightest_edge(endpoint, &tree) {
                queue.push(next);
            }
        }
    }

    debug!(
        root,
        tree = tree.len(),
        queued = queue.pushed,
        "spanning tree complete"
    );

    (tree, carved)
}

/// Open one cell on each side border next to an open interior cell.
fn open_entrances<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> (Coordinate, Coordinate) {
    let height = grid.height();
    let width = grid.width();

    let left_row = random_row_where(height, rng, |row| grid.is_open(row, 1));
    let left = Coordinate::new(left_row, 0);
    grid.set(left, Cell::Passage);

    // An even width leaves an unused column between the lattice and the border.
    let inner_col = if width % 2 == 0 { width - 3 } else { width - 2 };
    let right_row = random_row_where(height, rng, |row| grid.is_open(row, inner_col));
    for col in inner_col + 1..width {
        grid.set(Coordinate::new(right_row, col), Cell::Passage);
    }
    let right = Coordinate::new(right_row, width - 1);

    debug!(left = %left, right = %right, "opened entrances");
    (left, right)
}

/// Draw rows uniformly from `1..height` until `accept` holds.
///
/// Row 1 always satisfies the carver's predicates, so this terminates.
fn random_row_where<R, F>(height: usize, rng: &mut R, accept: F) -> usize
where
    R: Rng + ?Sized,
    F: Fn(usize) -> bool,
{
    loop {
        let row = rng.gen_range(1..height);
        if accept(row) {
            return row;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_pops_lightest_first_then_fifo() {
        let mut queue = EdgeQueue::default();
        queue.push(Edge::new(0, 1, 5));
        queue.push(Edge::new(2, 3, 1));
        queue.push(Edge::new(4, 5, 1));
        queue.push(Edge::new(6, 7, 3));

        let order: Vec<_> = std::iter::from_fn(|| queue.pop())
            .map(|edge| edge.from)
            .collect();
        assert_eq!(order, vec![2, 4, 6, 0]);
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let config = GeneratorConfig::default().with_seed(99);
        let first = generate_maze(11, 15, &config).unwrap();
        let second = generate_maze(11, 15, &config).unwrap();
        assert_eq!(first.grid, second.grid);
        assert_eq!(first.left_entrance, second.left_entrance);
    }

    #[test]
    fn tree_spans_every_lattice_vertex() {
        let maze = generate_maze(9, 9, &GeneratorConfig::default().with_seed(5)).unwrap();
        assert!(maze.tree.is_complete());
        assert_eq!(maze.carved_edges.len(), maze.lattice.vertex_count() - 1);
    }
}
