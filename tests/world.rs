use std::collections::HashSet;

use rand::Rng;
use rand::SeedableRng;
use torus_life::torus::Grid;
use torus_life::{LifeConfig, LifeError, Population, Position, World};

fn world_with(columns: u32, rows: u32, cells: &[(u32, u32)]) -> World {
    let population = cells.iter().copied().map(Position::from).collect();
    World::new(rows, columns, population).expect("cells on grid")
}

fn collect_live(world: &World) -> HashSet<(u32, u32)> {
    let mut out = HashSet::new();
    world.for_each_live(|x, y| {
        out.insert((x, y));
    });
    out
}

fn set_of(cells: &[(u32, u32)]) -> HashSet<(u32, u32)> {
    cells.iter().copied().collect()
}

fn shift(cells: &[(u32, u32)], dx: u32, dy: u32, columns: u32, rows: u32) -> HashSet<(u32, u32)> {
    cells
        .iter()
        .map(|&(x, y)| ((x + dx) % columns, (y + dy) % rows))
        .collect()
}

/// Dense reference step over every cell of the torus, counting all 8 slots.
fn step_naive(cells: &HashSet<(u32, u32)>, columns: u32, rows: u32) -> HashSet<(u32, u32)> {
    let mut next = HashSet::new();
    for y in 0..rows as i64 {
        for x in 0..columns as i64 {
            let mut neighbors = 0;
            for dy in -1..=1i64 {
                for dx in -1..=1i64 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let nx = (x + dx).rem_euclid(columns as i64) as u32;
                    let ny = (y + dy).rem_euclid(rows as i64) as u32;
                    if cells.contains(&(nx, ny)) {
                        neighbors += 1;
                    }
                }
            }
            let alive = cells.contains(&(x as u32, y as u32));
            let next_alive = if alive {
                neighbors == 2 || neighbors == 3
            } else {
                neighbors == 3
            };
            if next_alive {
                next.insert((x as u32, y as u32));
            }
        }
    }
    next
}

const GLIDER: [(u32, u32); 5] = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

#[test]
fn isolated_cell_dies() {
    let mut world = world_with(10, 10, &[(5, 5)]);
    world.next();
    assert!(world.is_empty());
}

#[test]
fn block_is_stable() {
    let block = [(1, 1), (2, 1), (1, 2), (2, 2)];
    let mut world = world_with(4, 4, &block);
    world.next();
    assert_eq!(collect_live(&world), set_of(&block));
    world.step_n(5);
    assert_eq!(collect_live(&world), set_of(&block));
}

#[test]
fn blinker_oscillates() {
    let horizontal = [(1, 2), (2, 2), (3, 2)];
    let vertical = [(2, 1), (2, 2), (2, 3)];
    let mut world = world_with(5, 5, &horizontal);

    world.next();
    assert_eq!(collect_live(&world), set_of(&vertical));

    world.next();
    assert_eq!(collect_live(&world), set_of(&horizontal));
}

#[test]
fn blinker_across_the_seam_oscillates() {
    let horizontal = [(9, 0), (0, 0), (1, 0)];
    let vertical = [(0, 9), (0, 0), (0, 1)];
    let mut world = world_with(10, 10, &horizontal);

    world.next();
    assert_eq!(collect_live(&world), set_of(&vertical));
    world.next();
    assert_eq!(collect_live(&world), set_of(&horizontal));
}

#[test]
fn empty_population_stays_empty() {
    let mut world = world_with(6, 6, &[(0, 0)]);
    world.clear();
    world.step_n(10);
    assert!(world.is_empty());
    assert_eq!(world.generation(), 10);
}

#[test]
fn origin_neighbors_include_far_corner() {
    for n in [2u32, 3, 7, 16] {
        let grid = Grid::new(n, n);
        assert!(grid.neighbors(Position::new(0, 0)).contains(&Position::new(n - 1, n - 1)));
    }
}

#[test]
fn glider_moves_one_cell_diagonally_every_four_steps() {
    let mut world = world_with(8, 8, &GLIDER);
    world.step_n(4);
    assert_eq!(collect_live(&world), shift(&GLIDER, 1, 1, 8, 8));
}

#[test]
fn glider_crosses_both_edges_and_returns_home() {
    // Start against the far corner so the first steps already straddle the seam.
    let start = shift(&GLIDER, 6, 6, 8, 8);
    let start_cells: Vec<_> = start.iter().copied().collect();
    let mut world = world_with(8, 8, &start_cells);

    for k in 1..=8u32 {
        world.step_n(4);
        assert_eq!(
            collect_live(&world),
            shift(&GLIDER, (6 + k) % 8, (6 + k) % 8, 8, 8),
            "after {} generations",
            4 * k
        );
    }
    assert_eq!(collect_live(&world), start);
    assert_eq!(world.generation(), 32);
}

#[test]
fn glider_on_huge_grid_only_touches_live_cells() {
    // 10^12 cells: a full-grid scan could not finish even one generation.
    const SIDE: u32 = 1_000_000;
    let start = shift(&GLIDER, 10, 10, SIDE, SIDE);
    let cells: Vec<_> = start.iter().copied().collect();
    let mut world = world_with(SIDE, SIDE, &cells);

    world.step_n(400);

    assert_eq!(world.live_count(), 5);
    assert_eq!(collect_live(&world), shift(&GLIDER, 110, 110, SIDE, SIDE));
}

#[test]
fn unit_grid_cell_sees_itself_eight_times_and_dies() {
    let mut world = world_with(1, 1, &[(0, 0)]);
    assert_eq!(
        world
            .population()
            .count_alive_neighbors(Position::new(0, 0), world.grid()),
        8
    );
    world.next();
    assert!(world.is_empty());
}

#[test]
fn degenerate_grid_is_a_no_op() {
    for (columns, rows) in [(0, 5), (5, 0), (0, 0)] {
        let mut world = World::new(rows, columns, Population::new()).expect("degenerate world");
        assert!(world.is_empty());
        world.populate_random();
        world.next();
        assert!(world.is_empty());
        assert!(matches!(
            world.set_cell(0, 0, true),
            Err(LifeError::OutOfBounds { .. })
        ));
        assert!(!world.get_cell(0, 0));
    }
}

#[test]
fn matches_naive_on_random_seeds() {
    for (columns, rows, seed) in [(16, 16, 0xBADC0FFEE), (23, 11, 7), (3, 40, 99), (2, 2, 5)] {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let mut naive = HashSet::new();
        for y in 0..rows {
            for x in 0..columns {
                if rng.random::<f64>() < 0.35 {
                    naive.insert((x, y));
                }
            }
        }
        if naive.is_empty() {
            naive.insert((0, 0));
        }
        let cells: Vec<_> = naive.iter().copied().collect();
        let mut world = world_with(columns, rows, &cells);

        for generation in 0..12 {
            assert_eq!(
                collect_live(&world),
                naive,
                "{columns}x{rows} seed {seed} generation {generation}"
            );
            world.next();
            naive = step_naive(&naive, columns, rows);
        }
    }
}

#[test]
fn transition_is_deterministic() {
    let config = LifeConfig::default().columns(40).rows(30).seed(0xD37E_A515);
    let mut a = World::from_config(&config).expect("world");
    let mut b = World::from_config(&config).expect("world");
    assert_eq!(a.population(), b.population());
    for _ in 0..20 {
        a.next();
        b.next();
        assert_eq!(a.population(), b.population());
    }
}

#[test]
fn manual_edits_between_generations_take_effect() {
    let mut world = world_with(8, 8, &[(1, 2), (2, 2)]);
    world.set_cell(3, 2, true).expect("on grid");
    world.next();
    assert_eq!(collect_live(&world), set_of(&[(2, 1), (2, 2), (2, 3)]));
}
