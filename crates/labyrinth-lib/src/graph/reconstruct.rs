use tracing::{debug, warn};

use super::{odd_extent, Entrance, Entrances, Graph, GraphMode, Weight};
use crate::error::{Error, Result, Side};
use crate::grid::{Coordinate, Grid};

/// Reconstruct the decision-point graph of an existing maze.
///
/// Vertices are the two entrance cells plus every open odd cell that is not a
/// straight through-passage. Edges join vertices connected by an uninterrupted
/// straight run of open cells, weighted by the number of steps along the run.
///
/// A vertex whose open neighbour does not lead straight to another vertex gets
/// no edge in that direction.
pub fn build_maze_graph(grid: &Grid) -> Result<Graph> {
    let height = grid.height();
    let width = grid.width();
    let odd_height = odd_extent(height);
    let odd_width = odd_extent(width);
    if odd_height < 3 || odd_width < 3 {
        return Err(Error::DegenerateSize { height, width });
    }

    let (first_border, first_vertex) = locate_entrance(grid, Side::Left)?;
    let (second_border, second_vertex) = locate_entrance(grid, Side::Right)?;

    let mut coordinates = vec![first_vertex, second_vertex];
    for row in (1..odd_height - 1).step_by(2) {
        for col in (1..odd_width - 1).step_by(2) {
            if is_decision_point(grid, row, col) {
                coordinates.push(Coordinate::new(row, col));
            }
        }
    }
    coordinates.sort_unstable();
    coordinates.dedup();

    let mut graph = Graph::with_vertices(GraphMode::Reconstructed, coordinates);
    connect_runs(&mut graph, grid);

    let first_id = graph
        .vertex_at(first_vertex)
        .ok_or(Error::MissingEntrance { side: Side::Left })?;
    let second_id = graph
        .vertex_at(second_vertex)
        .ok_or(Error::MissingEntrance { side: Side::Right })?;

    graph.entrances = Some(Entrances {
        first: Entrance {
            side: Side::Left,
            border: first_border,
            coordinate: first_vertex,
            vertex: first_id,
        },
        second: Entrance {
            side: Side::Right,
            border: second_border,
            coordinate: second_vertex,
            vertex: second_id,
        },
    });

    debug!(
        height,
        width,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        first_entrance = %first_vertex,
        second_entrance = %second_vertex,
        "reconstructed maze graph"
    );

    Ok(graph)
}

/// Rows holding an opening on the given border, corners excluded.
pub(crate) fn border_openings(grid: &Grid, side: Side) -> Vec<usize> {
    let height = grid.height();
    if height < 3 || grid.width() == 0 {
        return Vec::new();
    }
    let col = match side {
        Side::Left => 0,
        Side::Right => grid.width() - 1,
    };
    (1..height - 1)
        .filter(|&row| grid.is_open(row, col))
        .collect()
}

/// Find the border opening on `side` and the vertex coordinate it leads to.
///
/// The left vertex is one column in. The right vertex is one column in for odd
/// widths and two columns in for even widths, where the extra column belongs
/// to the entrance run.
fn locate_entrance(grid: &Grid, side: Side) -> Result<(Coordinate, Coordinate)> {
    let openings = border_openings(grid, side);
    let Some(&row) = openings.first() else {
        return Err(Error::MissingEntrance { side });
    };
    if openings.len() > 1 {
        warn!(%side, rows = ?openings, "multiple border openings; using the topmost");
    }

    let width = grid.width();
    let (border_col, vertex_col) = match side {
        Side::Left => (0, 1),
        Side::Right if width % 2 == 0 => (width - 1, width - 3),
        Side::Right => (width - 1, width - 2),
    };

    let lo = border_col.min(vertex_col);
    let hi = border_col.max(vertex_col);
    if !(lo..=hi).all(|col| grid.is_open(row, col)) {
        return Err(Error::BlockedEntrance { side, row });
    }

    Ok((Coordinate::new(row, border_col), Coordinate::new(row, vertex_col)))
}

/// Open cell that is not a straight through-passage.
fn is_decision_point(grid: &Grid, row: usize, col: usize) -> bool {
    if !grid.is_open(row, col) {
        return false;
    }

    let up = grid.is_open(row - 1, col);
    let down = grid.is_open(row + 1, col);
    let left = grid.is_open(row, col - 1);
    let right = grid.is_open(row, col + 1);
    let open = [up, down, left, right].iter().filter(|&&o| o).count();

    !(open == 2 && ((left && right) || (up && down)))
}

fn connect_runs(graph: &mut Graph, grid: &Grid) {
    let vertex_count = graph.vertex_count();
    for id in 0..vertex_count {
        let here = graph.coordinate(id);

        if grid.is_open(here.row + 1, here.col) {
            // Row-major order puts the nearest vertex below first.
            let below =
                (id + 1..vertex_count).find(|&other| graph.coordinate(other).col == here.col);
            if let Some(other) = below {
                let there = graph.coordinate(other);
                if (here.row + 1..there.row).all(|row| grid.is_open(row, here.col)) {
                    graph.connect(id, other, (there.row - here.row) as Weight);
                }
            }
        }

        if grid.is_open(here.row, here.col + 1) && id + 1 < vertex_count {
            let there = graph.coordinate(id + 1);
            if there.row == here.row
                && (here.col + 1..there.col).all(|col| grid.is_open(here.row, col))
            {
                graph.connect(id, id + 1, (there.col - here.col) as Weight);
            }
        }
    }
}
