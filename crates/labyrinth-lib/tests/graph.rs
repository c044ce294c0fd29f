mod common;

use labyrinth_lib::{
    build_maze_graph, generate_maze, Coordinate, EdgeWeight, GeneratorConfig, GraphMode, Grid,
};

use common::{grid, open_cells, reachable_vertices};

fn is_through_passage(grid: &Grid, c: Coordinate) -> bool {
    let up = grid.is_open(c.row - 1, c.col);
    let down = grid.is_open(c.row + 1, c.col);
    let left = grid.is_open(c.row, c.col - 1);
    let right = grid.is_open(c.row, c.col + 1);
    (up && down && !left && !right) || (left && right && !up && !down)
}

#[test]
fn reconstruction_round_trips_generated_mazes() {
    for (height, width) in [(5, 5), (9, 15), (17, 11), (10, 12)] {
        for seed in 0..15 {
            let config = GeneratorConfig::default().with_seed(seed);
            let maze = generate_maze(height, width, &config).unwrap();
            let graph = build_maze_graph(&maze.grid).expect("generated maze reconstructs");
            assert_eq!(graph.mode(), GraphMode::Reconstructed);

            let entrances = graph.entrances().expect("entrances recorded");
            assert_eq!(entrances.first.border, maze.left_entrance);
            assert_eq!(entrances.second.border, maze.right_entrance);
            assert_eq!(graph.coordinate(entrances.first.vertex), entrances.first.coordinate);
            assert_eq!(graph.coordinate(entrances.second.vertex), entrances.second.coordinate);

            // Collapsing through-passages keeps every lattice decision point.
            let mut expected: Vec<Coordinate> = maze
                .lattice
                .coordinates()
                .iter()
                .copied()
                .filter(|&c| !is_through_passage(&maze.grid, c))
                .chain([entrances.first.coordinate, entrances.second.coordinate])
                .collect();
            expected.sort_unstable();
            expected.dedup();
            assert_eq!(graph.coordinates(), expected.as_slice(), "seed {seed}");

            // The carved tree stays a tree after collapsing.
            assert_eq!(graph.edge_count() + 1, graph.vertex_count(), "seed {seed}");
            assert_eq!(
                reachable_vertices(&graph, entrances.first.vertex),
                graph.vertex_count(),
                "seed {seed}:\n{}",
                maze.grid
            );

            // Corridor weights cover every open cell between the entrance vertices.
            let total: u32 = (0..graph.vertex_count())
                .flat_map(|v| graph.neighbours(v).iter().map(move |n| (v, n.weight, n.target)))
                .filter(|&(v, _, target)| v < target)
                .map(|(_, weight, _)| weight)
                .sum();
            let outer = entrances.first.coordinate.distance_to(&entrances.first.border)
                + entrances.second.coordinate.distance_to(&entrances.second.border);
            assert_eq!(total as usize, open_cells(&maze.grid) - outer - 1);
        }
    }
}

#[test]
fn entrance_facing_a_vertical_corridor_becomes_a_vertex() {
    let graph = build_maze_graph(&grid(&[
        "11111", //
        "10001", //
        "00101", //
        "10100", //
        "11111",
    ]))
    .unwrap();

    let entrances = graph.entrances().unwrap();
    assert_eq!(entrances.first.coordinate, Coordinate::new(2, 1));
    assert_eq!(entrances.second.coordinate, Coordinate::new(3, 3));
    assert_eq!(
        graph.coordinates(),
        &[
            Coordinate::new(1, 1),
            Coordinate::new(1, 3),
            Coordinate::new(2, 1),
            Coordinate::new(3, 1),
            Coordinate::new(3, 3),
        ]
    );
    assert_eq!(graph.weight(0, 2), EdgeWeight::Weighted(1));
    assert_eq!(graph.weight(2, 3), EdgeWeight::Weighted(1));
    assert_eq!(graph.weight(0, 1), EdgeWeight::Weighted(2));
    assert_eq!(graph.weight(1, 4), EdgeWeight::Weighted(2));
    assert_eq!(graph.edge_count(), 4);
}

#[test]
fn weight_matrix_view_is_symmetric() {
    let config = GeneratorConfig::default().with_seed(2024);
    let maze = generate_maze(11, 11, &config).unwrap();
    let graph = build_maze_graph(&maze.grid).unwrap();

    for a in 0..graph.vertex_count() {
        assert_eq!(graph.weight(a, a), EdgeWeight::SelfLoop);
        for b in 0..graph.vertex_count() {
            assert_eq!(graph.weight(a, b), graph.weight(b, a));
        }
    }
}
