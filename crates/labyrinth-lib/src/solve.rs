use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result, Side};
use crate::graph::{build_maze_graph, Entrances, Graph, VertexId, Weight};
use crate::grid::{Cell, Coordinate, Grid};

/// Strategy used to compute distances from the first entrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceAlgorithm {
    /// Priority-queue Dijkstra; distances are exact shortest distances.
    #[default]
    Dijkstra,
    /// Depth-first relaxation walk that always follows the lightest unvisited
    /// edge and never revisits a vertex. On graphs with cycles it can settle
    /// a vertex at a distance larger than the shortest one.
    StackWalk,
}

impl fmt::Display for DistanceAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            DistanceAlgorithm::Dijkstra => "dijkstra",
            DistanceAlgorithm::StackWalk => "stack_walk",
        };
        f.write_str(value)
    }
}

/// Escape route between the two entrances of a maze.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub algorithm: DistanceAlgorithm,
    pub entrances: Entrances,
    /// Vertex coordinates from the second entrance back to the first.
    pub path: Vec<Coordinate>,
    /// Sum of edge weights along `path`.
    pub length: Weight,
}

impl Solution {
    /// Number of corridor segments in the path.
    pub fn segment_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Distance from `start` to every vertex; `None` marks unreachable vertices.
pub fn distances_from(
    graph: &Graph,
    start: VertexId,
    algorithm: DistanceAlgorithm,
) -> Vec<Option<Weight>> {
    let distances = match algorithm {
        DistanceAlgorithm::Dijkstra => dijkstra(graph, start),
        DistanceAlgorithm::StackWalk => stack_walk(graph, start),
    };
    debug!(
        %algorithm,
        start,
        reached = distances.iter().filter(|d| d.is_some()).count(),
        vertices = graph.vertex_count(),
        "computed distances"
    );
    distances
}

/// Distances from the first entrance of a reconstructed graph.
pub fn distances_to_start(graph: &Graph, algorithm: DistanceAlgorithm) -> Result<Vec<Option<Weight>>> {
    let entrances = graph
        .entrances()
        .ok_or(Error::MissingEntrance { side: Side::Left })?;
    Ok(distances_from(graph, entrances.first.vertex, algorithm))
}

fn dijkstra(graph: &Graph, start: VertexId) -> Vec<Option<Weight>> {
    let mut distances: Vec<Option<Weight>> = vec![None; graph.vertex_count()];
    let mut queue = BinaryHeap::new();

    distances[start] = Some(0);
    queue.push(QueueEntry::new(start, 0));

    while let Some(entry) = queue.pop() {
        if distances[entry.vertex].is_some_and(|settled| settled < entry.cost) {
            continue;
        }

        for neighbour in graph.neighbours(entry.vertex) {
            let next_cost = entry.cost + neighbour.weight;
            if distances[neighbour.target].map_or(true, |known| next_cost < known) {
                distances[neighbour.target] = Some(next_cost);
                queue.push(QueueEntry::new(neighbour.target, next_cost));
            }
        }
    }

    distances
}

fn stack_walk(graph: &Graph, start: VertexId) -> Vec<Option<Weight>> {
    let mut distances: Vec<Option<Weight>> = vec![None; graph.vertex_count()];
    let mut visited = vec![false; graph.vertex_count()];
    let mut stack = vec![(start, 0)];

    distances[start] = Some(0);
    visited[start] = true;

    while let Some(&(vertex, distance)) = stack.last() {
        let next = graph
            .neighbours(vertex)
            .iter()
            .filter(|n| !visited[n.target])
            .min_by_key(|n| (n.weight, n.target));

        match next {
            Some(neighbour) => {
                let reached = distance + neighbour.weight;
                visited[neighbour.target] = true;
                distances[neighbour.target] = Some(reached);
                stack.push((neighbour.target, reached));
            }
            None => {
                stack.pop();
            }
        }
    }

    distances
}

/// Walk from `from` back to `to` along decreasing distances.
///
/// Each step picks the neighbour with a strictly smaller distance that
/// minimises `distance + edge weight`, which follows a shortest path whenever
/// the distances are exact.
pub fn escape_path(
    graph: &Graph,
    distances: &[Option<Weight>],
    from: VertexId,
    to: VertexId,
) -> Result<Vec<Coordinate>> {
    let mut current = from;
    let mut current_distance = distances
        .get(from)
        .copied()
        .flatten()
        .ok_or(Error::NoPath)?;
    let mut path = vec![graph.coordinate(from)];

    while current != to {
        let next = graph
            .neighbours(current)
            .iter()
            .filter_map(|n| distances.get(n.target).copied().flatten().map(|d| (n, d)))
            .filter(|&(_, d)| d < current_distance)
            .min_by_key(|&(n, d)| (d + n.weight, d, n.target));

        let Some((neighbour, distance)) = next else {
            return Err(Error::NoPath);
        };
        current = neighbour.target;
        current_distance = distance;
        path.push(graph.coordinate(current));
    }

    Ok(path)
}

/// Solve a reconstructed graph between its two entrances.
pub fn solve_graph(graph: &Graph, algorithm: DistanceAlgorithm) -> Result<Solution> {
    let entrances = *graph
        .entrances()
        .ok_or(Error::MissingEntrance { side: Side::Left })?;
    let distances = distances_from(graph, entrances.first.vertex, algorithm);
    let path = escape_path(
        graph,
        &distances,
        entrances.second.vertex,
        entrances.first.vertex,
    )?;
    let length: Weight = path
        .windows(2)
        .map(|pair| pair[0].distance_to(&pair[1]) as Weight)
        .sum();

    info!(
        %algorithm,
        vertices = graph.vertex_count(),
        segments = path.len().saturating_sub(1),
        length,
        "solved maze"
    );

    Ok(Solution {
        algorithm,
        entrances,
        path,
        length,
    })
}

/// Reconstruct the graph of `grid` and solve it.
pub fn solve_grid(grid: &Grid, algorithm: DistanceAlgorithm) -> Result<Solution> {
    let graph = build_maze_graph(grid)?;
    solve_graph(&graph, algorithm)
}

/// Mark the solution on `grid`: every straight span between consecutive path
/// coordinates plus the runs from each entrance vertex out to its border cell.
pub fn annotate(grid: &mut Grid, solution: &Solution) {
    for pair in solution.path.windows(2) {
        mark_span(grid, pair[0], pair[1]);
    }
    for entrance in [solution.entrances.first, solution.entrances.second] {
        mark_span(grid, entrance.coordinate, entrance.border);
    }
}

fn mark_span(grid: &mut Grid, a: Coordinate, b: Coordinate) {
    if a.row == b.row {
        for col in a.col.min(b.col)..=a.col.max(b.col) {
            grid.set(Coordinate::new(a.row, col), Cell::Path);
        }
    } else {
        for row in a.row.min(b.row)..=a.row.max(b.row) {
            grid.set(Coordinate::new(row, a.col), Cell::Path);
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    vertex: VertexId,
    cost: Weight,
}

impl QueueEntry {
    fn new(vertex: VertexId, cost: Weight) -> Self {
        Self { vertex, cost }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
