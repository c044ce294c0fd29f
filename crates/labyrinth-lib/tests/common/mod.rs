#![allow(dead_code)]

use std::collections::VecDeque;

use labyrinth_lib::{Cell, Coordinate, Graph, Grid};

/// Open cells reachable from `start` through orthogonal moves.
pub fn flood_fill(grid: &Grid, start: Coordinate) -> usize {
    let mut seen = vec![false; grid.height() * grid.width()];
    let mut queue = VecDeque::from([start]);
    seen[start.row * grid.width() + start.col] = true;
    let mut count = 0;

    while let Some(cell) = queue.pop_front() {
        count += 1;
        for next in orthogonal(grid, cell) {
            let index = next.row * grid.width() + next.col;
            if grid.is_open(next.row, next.col) && !seen[index] {
                seen[index] = true;
                queue.push_back(next);
            }
        }
    }

    count
}

/// Number of orthogonally adjacent pairs of open cells.
pub fn open_adjacencies(grid: &Grid) -> usize {
    let mut pairs = 0;
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            if !grid.is_open(row, col) {
                continue;
            }
            if grid.is_open(row + 1, col) {
                pairs += 1;
            }
            if grid.is_open(row, col + 1) {
                pairs += 1;
            }
        }
    }
    pairs
}

pub fn open_cells(grid: &Grid) -> usize {
    grid.count(Cell::Passage) + grid.count(Cell::Path)
}

/// Open cells on the outer border, as (row, col) pairs.
pub fn border_openings(grid: &Grid) -> Vec<Coordinate> {
    let (h, w) = (grid.height(), grid.width());
    let mut openings = Vec::new();
    for row in 0..h {
        for col in 0..w {
            let on_border = row == 0 || col == 0 || row == h - 1 || col == w - 1;
            if on_border && grid.is_open(row, col) {
                openings.push(Coordinate::new(row, col));
            }
        }
    }
    openings
}

/// Assert that the open cells form a single tree touching every open cell.
pub fn assert_perfect(grid: &Grid) {
    let openings = border_openings(grid);
    assert!(!openings.is_empty(), "maze has no openings:\n{grid}");
    let cells = open_cells(grid);
    assert_eq!(
        flood_fill(grid, openings[0]),
        cells,
        "open cells are not connected:\n{grid}"
    );
    assert_eq!(
        open_adjacencies(grid),
        cells - 1,
        "open cells contain a cycle:\n{grid}"
    );
}

/// Vertices reachable from `start` in the graph.
pub fn reachable_vertices(graph: &Graph, start: usize) -> usize {
    let mut seen = vec![false; graph.vertex_count()];
    let mut stack = vec![start];
    seen[start] = true;
    let mut count = 0;
    while let Some(vertex) = stack.pop() {
        count += 1;
        for neighbour in graph.neighbours(vertex) {
            if !seen[neighbour.target] {
                seen[neighbour.target] = true;
                stack.push(neighbour.target);
            }
        }
    }
    count
}

pub fn grid(lines: &[&str]) -> Grid {
    lines.join("\n").parse().expect("fixture grid parses")
}

fn orthogonal(grid: &Grid, cell: Coordinate) -> Vec<Coordinate> {
    let mut out = Vec::with_capacity(4);
    if cell.row > 0 {
        out.push(Coordinate::new(cell.row - 1, cell.col));
    }
    if cell.row + 1 < grid.height() {
        out.push(Coordinate::new(cell.row + 1, cell.col));
    }
    if cell.col > 0 {
        out.push(Coordinate::new(cell.row, cell.col - 1));
    }
    if cell.col + 1 < grid.width() {
        out.push(Coordinate::new(cell.row, cell.col + 1));
    }
    out
}
