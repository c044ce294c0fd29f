//! Graph of maze decision points.
//!
//! This module provides:
//! - [`Graph`] - vertex coordinates plus a sparse, symmetric weighted adjacency
//! - [`build_lattice_graph`] - the full candidate lattice used for carving
//! - [`build_maze_graph`] - vertices and corridors inferred from a drawn grid
//!
//! Vertex ids are dense and assigned in row-major order of their coordinates,
//! so the coordinate table is always sorted.

mod lattice;
mod reconstruct;

pub use lattice::{build_lattice_graph, WeightRange};
pub use reconstruct::build_maze_graph;

pub(crate) use reconstruct::border_openings;

use rand::Rng;
use serde::Serialize;

use crate::edge::Edge;
use crate::error::Side;
use crate::grid::Coordinate;
use crate::tree::SpanningTree;

/// Dense vertex identifier.
pub type VertexId = usize;

/// Edge weight. Lattice weights are random, reconstructed weights are cell distances.
pub type Weight = u32;

/// Relationship between two vertex ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeWeight {
    NoEdge,
    /// A vertex paired with itself.
    SelfLoop,
    Weighted(Weight),
}

/// How a graph was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphMode {
    /// Full lattice with random weights, the input to carving.
    Lattice,
    /// Inferred from an existing grid of walls and passages.
    Reconstructed,
}

/// Adjacent vertex and the weight of the connecting edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbour {
    pub target: VertexId,
    pub weight: Weight,
}

/// Border opening paired with the vertex it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entrance {
    pub side: Side,
    /// Opening on the outer wall.
    pub border: Coordinate,
    /// Coordinate of the entrance vertex.
    pub coordinate: Coordinate,
    pub vertex: VertexId,
}

/// The two entrances of a reconstructed maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entrances {
    pub first: Entrance,
    pub second: Entrance,
}

/// Graph structure shared by the carver and the solver.
#[derive(Debug, Clone)]
pub struct Graph {
    mode: GraphMode,
    coordinates: Vec<Coordinate>,
    adjacency: Vec<Vec<Neighbour>>,
    entrances: Option<Entrances>,
}

impl Graph {
    fn with_vertices(mode: GraphMode, coordinates: Vec<Coordinate>) -> Self {
        let adjacency = vec![Vec::new(); coordinates.len()];
        Self {
            mode,
            coordinates,
            adjacency,
            entrances: None,
        }
    }

    /// Add a symmetric edge, keeping each neighbour list ordered by id.
    fn connect(&mut self, a: VertexId, b: VertexId, weight: Weight) {
        debug_assert!(a != b, "self loops are implicit");
        debug_assert!(weight > 0, "edge weights are positive");
        Self::insert_neighbour(&mut self.adjacency[a], b, weight);
        Self::insert_neighbour(&mut self.adjacency[b], a, weight);
    }

    fn insert_neighbour(list: &mut Vec<Neighbour>, target: VertexId, weight: Weight) {
        match list.binary_search_by_key(&target, |n| n.target) {
            Ok(index) => list[index].weight = weight,
            Err(index) => list.insert(index, Neighbour { target, weight }),
        }
    }

    /// Mode that produced this graph.
    pub fn mode(&self) -> GraphMode {
        self.mode
    }

    pub fn vertex_count(&self) -> usize {
        self.coordinates.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Grid coordinate owned by `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a valid id for this graph.
    pub fn coordinate(&self, vertex: VertexId) -> Coordinate {
        self.coordinates[vertex]
    }

    /// All vertex coordinates indexed by id.
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Vertex placed at `coordinate`, if any.
    pub fn vertex_at(&self, coordinate: Coordinate) -> Option<VertexId> {
        self.coordinates.binary_search(&coordinate).ok()
    }

    /// Return the neighbours of a vertex ordered by id.
    pub fn neighbours(&self, vertex: VertexId) -> &[Neighbour] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Relationship between two vertices.
    pub fn weight(&self, a: VertexId, b: VertexId) -> EdgeWeight {
        if a == b && a < self.vertex_count() {
            return EdgeWeight::SelfLoop;
        }
        self.neighbours(a)
            .binary_search_by_key(&b, |n| n.target)
            .map(|index| EdgeWeight::Weighted(self.adjacency[a][index].weight))
            .unwrap_or(EdgeWeight::NoEdge)
    }

    /// Entrances of a reconstructed maze. Lattice graphs have none.
    pub fn entrances(&self) -> Option<&Entrances> {
        self.entrances.as_ref()
    }

    /// Lightest edge from `vertex` to a vertex outside `tree`.
    ///
    /// Ties go to the lower target id.
    pub fn lightest_edge(&self, vertex: VertexId, tree: &SpanningTree) -> Option<Edge> {
        self.neighbours(vertex)
            .iter()
            .filter(|n| !tree.contains(n.target))
            .min_by_key(|n| (n.weight, n.target))
            .map(|n| Edge::new(vertex, n.target, n.weight))
    }

    /// Uniformly random vertex id.
    ///
    /// # Panics
    ///
    /// Panics if the graph has no vertices, which construction rules out.
    pub fn random_vertex<R: Rng + ?Sized>(&self, rng: &mut R) -> VertexId {
        rng.gen_range(0..self.vertex_count())
    }
}

/// Largest odd extent not exceeding `n`.
pub(crate) fn odd_extent(n: usize) -> usize {
    if n % 2 == 0 {
        n.saturating_sub(1)
    } else {
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        let mut graph = Graph::with_vertices(
            GraphMode::Reconstructed,
            vec![
                Coordinate::new(1, 1),
                Coordinate::new(1, 3),
                Coordinate::new(3, 1),
            ],
        );
        graph.connect(0, 1, 2);
        graph.connect(0, 2, 5);
        graph
    }

    #[test]
    fn weight_reports_three_states() {
        let graph = triangle();
        assert_eq!(graph.weight(0, 0), EdgeWeight::SelfLoop);
        assert_eq!(graph.weight(0, 1), EdgeWeight::Weighted(2));
        assert_eq!(graph.weight(2, 0), EdgeWeight::Weighted(5));
        assert_eq!(graph.weight(1, 2), EdgeWeight::NoEdge);
        assert_eq!(graph.weight(9, 9), EdgeWeight::NoEdge);
    }

    #[test]
    fn lightest_edge_skips_tree_members() {
        let graph = triangle();
        let mut tree = SpanningTree::new(graph.vertex_count());
        tree.insert(0);

        let edge = graph.lightest_edge(0, &tree).expect("edge to 1");
        assert_eq!((edge.from, edge.to, edge.weight), (0, 1, 2));

        tree.insert(1);
        let edge = graph.lightest_edge(0, &tree).expect("edge to 2");
        assert_eq!(edge.to, 2);

        tree.insert(2);
        assert!(graph.lightest_edge(0, &tree).is_none());
    }

    #[test]
    fn vertex_lookup_uses_row_major_order() {
        let graph = triangle();
        assert_eq!(graph.vertex_at(Coordinate::new(3, 1)), Some(2));
        assert_eq!(graph.vertex_at(Coordinate::new(2, 2)), None);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn odd_extent_truncates_even_sizes() {
        assert_eq!(odd_extent(7), 7);
        assert_eq!(odd_extent(8), 7);
        assert_eq!(odd_extent(0), 0);
    }
}
