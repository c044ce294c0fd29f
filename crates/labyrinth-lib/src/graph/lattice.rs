use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{odd_extent, Graph, GraphMode, Weight};
use crate::error::{Error, Result};
use crate::grid::Coordinate;

/// Inclusive range of random weights assigned to lattice edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightRange {
    pub min: Weight,
    pub max: Weight,
}

impl Default for WeightRange {
    fn default() -> Self {
        Self { min: 1, max: 10 }
    }
}

impl WeightRange {
    pub fn new(min: Weight, max: Weight) -> Result<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// Weights must be positive so they never read as a self loop.
    pub fn validate(&self) -> Result<()> {
        if self.min == 0 || self.min > self.max {
            return Err(Error::InvalidWeightRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Weight {
        rng.gen_range(self.min..=self.max)
    }
}

/// Build the fully connected lattice for a maze of the given size.
///
/// Even sizes are truncated to the next smaller odd size. Vertex `i` sits at
/// row `2 * (i / cols) + 1`, column `2 * (i % cols) + 1`, and is joined to its
/// right neighbour on the same row and to the neighbour one lattice row below.
pub fn build_lattice_graph<R: Rng + ?Sized>(
    height: usize,
    width: usize,
    weights: &WeightRange,
    rng: &mut R,
) -> Result<Graph> {
    weights.validate()?;

    let odd_height = odd_extent(height);
    let odd_width = odd_extent(width);
    if odd_height < 3 || odd_width < 3 {
        return Err(Error::DegenerateSize { height, width });
    }

    let rows = odd_height / 2;
    let cols = odd_width / 2;
    let vertex_count = rows * cols;

    let coordinates = (0..vertex_count)
        .map(|id| Coordinate::new(2 * (id / cols) + 1, 2 * (id % cols) + 1))
        .collect();
    let mut graph = Graph::with_vertices(GraphMode::Lattice, coordinates);

    for id in 0..vertex_count {
        if (id + 1) % cols != 0 {
            graph.connect(id, id + 1, weights.sample(rng));
        }
        if id + cols < vertex_count {
            graph.connect(id, id + cols, weights.sample(rng));
        }
    }

    debug!(
        height,
        width,
        vertices = vertex_count,
        edges = graph.edge_count(),
        "built lattice graph"
    );

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::graph::EdgeWeight;

    fn lattice(height: usize, width: usize) -> Graph {
        let mut rng = StdRng::seed_from_u64(11);
        build_lattice_graph(height, width, &WeightRange::default(), &mut rng).expect("lattice")
    }

    #[test]
    fn minimal_lattice_has_single_vertex() {
        let graph = lattice(3, 3);
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.coordinate(0), Coordinate::new(1, 1));
        assert_eq!(graph.mode(), GraphMode::Lattice);
    }

    #[test]
    fn vertices_sit_on_odd_cells() {
        let graph = lattice(7, 9);
        assert_eq!(graph.vertex_count(), 12);
        for coordinate in graph.coordinates() {
            assert_eq!(coordinate.row % 2, 1);
            assert_eq!(coordinate.col % 2, 1);
        }
        assert_eq!(graph.coordinate(4), Coordinate::new(3, 1));
    }

    #[test]
    fn rows_do_not_wrap() {
        let graph = lattice(5, 7);
        // 2 rows of 3 vertices: 2 is the last vertex of the first row.
        assert_eq!(graph.weight(2, 3), EdgeWeight::NoEdge);
        assert!(matches!(graph.weight(2, 5), EdgeWeight::Weighted(_)));
        // Two horizontal edges per row plus three vertical edges.
        assert_eq!(graph.edge_count(), 7);
    }

    #[test]
    fn weights_stay_in_range_and_symmetric() {
        let mut rng = StdRng::seed_from_u64(3);
        let range = WeightRange::new(2, 4).unwrap();
        let graph = build_lattice_graph(11, 11, &range, &mut rng).unwrap();
        for a in 0..graph.vertex_count() {
            for neighbour in graph.neighbours(a) {
                assert!((2..=4).contains(&neighbour.weight));
                assert_eq!(
                    graph.weight(neighbour.target, a),
                    EdgeWeight::Weighted(neighbour.weight)
                );
            }
        }
    }

    #[test]
    fn even_sizes_are_truncated() {
        let graph = lattice(6, 8);
        assert_eq!(graph.vertex_count(), lattice(5, 7).vertex_count());
    }

    #[test]
    fn degenerate_sizes_are_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        for (height, width) in [(2, 9), (9, 2), (1, 1), (0, 5), (4, 3)] {
            let result = build_lattice_graph(height, width, &WeightRange::default(), &mut rng);
            if (height, width) == (4, 3) {
                assert!(result.is_ok(), "4x3 truncates to 3x3");
            } else {
                assert!(matches!(result, Err(Error::DegenerateSize { .. })));
            }
        }
    }

    #[test]
    fn invalid_weight_ranges_are_rejected() {
        assert!(matches!(
            WeightRange::new(0, 5),
            Err(Error::InvalidWeightRange { min: 0, max: 5 })
        ));
        assert!(WeightRange::new(6, 5).is_err());
        assert!(WeightRange::new(3, 3).is_ok());
    }
}
