//! Compare serial and rayon-parallel evolution across grid sizes.
//!
//! Usage: `benchmark [iterations]`

use std::time::Instant;

use anyhow::Context;
use life_canvas::{Grid, LifeRule};

type Evolve = fn(&Grid, &LifeRule) -> Grid;

fn benchmark(seed: &Grid, iterations: u32, evolve: Evolve) -> f64 {
    let rule = LifeRule::default();
    let mut grid = seed.clone();

    let start = Instant::now();
    for _ in 0..iterations {
        grid = evolve(&grid, &rule);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let iterations: u32 = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("iterations must be a positive integer, got {:?}", arg))?,
        None => 20,
    };
    anyhow::ensure!(iterations > 0, "iterations must be at least 1");
    log::info!("benchmarking with {} iterations per size", iterations);

    println!("=== Game of Life Performance Benchmark ===\n");
    println!("{:>12} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<50}", "");

    for size in [100, 256, 500, 1000, 2000] {
        // Both variants start from the same seed
        let seed = Grid::random(size, size, 0.25, &mut rand::rng());
        let serial_ms = benchmark(&seed, iterations, Grid::evolve);
        let parallel_ms = benchmark(&seed, iterations, Grid::evolve_parallel);

        println!(
            "{:>12} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    Ok(())
}
