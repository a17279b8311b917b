#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use rand::SeedableRng;
use std::time::Instant;
use torus_life::{Population, Position, World};

fn bench(size: u32, density: f64, iterations: u64) -> anyhow::Result<(f64, usize, usize)> {
    // Non-empty start skips the default seeding pass.
    let start_cell: Population = [Position::new(0, 0)].into_iter().collect();
    let mut world = World::new(size, size, start_cell)?;
    world.set_density(density)?;
    world.reseed(&mut rand::rngs::StdRng::seed_from_u64(0x5EED_1234_ABCD_EF01));
    let seeded = world.live_count();

    let start = Instant::now();
    world.step_n(iterations);
    let duration = start.elapsed();

    let total_ms = duration.as_secs_f64() * 1000.0;
    Ok((total_ms, seeded, world.live_count()))
}

fn main() -> anyhow::Result<()> {
    // Same grid, falling density: cost should follow live cells, not area.
    let cases: &[(u32, f64, u64)] = &[
        (256, 0.50, 50),
        (256, 0.10, 50),
        (1024, 0.50, 10),
        (1024, 0.10, 10),
        (1024, 0.01, 10),
        (4096, 0.001, 10),
    ];

    println!(
        "{:<12} {:>8} {:>10} {:>10} {:>12} {:>12}",
        "Grid", "Density", "Seeded", "Final", "Total(ms)", "Avg(ms)"
    );
    println!("{}", "-".repeat(70));

    for &(size, density, iters) in cases {
        let (total_ms, seeded, remaining) = bench(size, density, iters)?;
        let avg_ms = total_ms / iters as f64;
        println!(
            "{:<12} {:>8} {:>10} {:>10} {:>12.1} {:>12.4}",
            format!("{}x{}", size, size),
            density,
            seeded,
            remaining,
            total_ms,
            avg_ms
        );
    }
    Ok(())
}
