use serde::Serialize;

use crate::graph::{Graph, VertexId, Weight};
use crate::grid::Coordinate;
use crate::tree::SpanningTree;

/// Weighted connection between two vertices, used while carving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: VertexId, to: VertexId, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    /// Grid cell halfway between the two endpoints.
    ///
    /// Endpoints are lattice neighbours: two cells apart along exactly one axis.
    pub fn midpoint(&self, graph: &Graph) -> Coordinate {
        let a = graph.coordinate(self.from);
        let b = graph.coordinate(self.to);
        if a.row == b.row {
            Coordinate::new(a.row, (a.col + b.col) / 2)
        } else {
            Coordinate::new((a.row + b.row) / 2, a.col)
        }
    }

    /// `true` when both endpoints already belong to `tree`.
    pub fn contains_both(&self, tree: &SpanningTree) -> bool {
        tree.contains(self.from) && tree.contains(self.to)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::graph::{build_lattice_graph, WeightRange};

    #[test]
    fn midpoint_between_horizontal_neighbours() {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = build_lattice_graph(5, 5, &WeightRange::default(), &mut rng).unwrap();
        let edge = Edge::new(0, 1, 3);
        assert_eq!(edge.midpoint(&graph), Coordinate::new(1, 2));
    }

    #[test]
    fn midpoint_between_vertical_neighbours() {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = build_lattice_graph(5, 5, &WeightRange::default(), &mut rng).unwrap();
        let edge = Edge::new(3, 1, 3);
        assert_eq!(edge.midpoint(&graph), Coordinate::new(2, 3));
    }

    #[test]
    fn contains_both_requires_each_endpoint() {
        let mut tree = SpanningTree::new(3);
        tree.insert(0);
        let edge = Edge::new(0, 2, 1);
        assert!(!edge.contains_both(&tree));
        tree.insert(2);
        assert!(edge.contains_both(&tree));
    }
}
