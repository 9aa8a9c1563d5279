//! Performance benchmark comparing serial and parallel advance

use rand::{SeedableRng, rngs::StdRng};
use std::time::Instant;
use toroidal_life::{Algorithm, LifeError, Universe};

fn benchmark(algorithm: Algorithm, size: usize, iterations: u32) -> Result<f64, LifeError> {
    let mut universe = Universe::new(size, size)?.with_algorithm(algorithm);
    universe.seed(None, &mut StdRng::seed_from_u64(size as u64));

    let start = Instant::now();
    for _ in 0..iterations {
        universe.advance();
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> Result<(), LifeError> {
    println!("=== Game of Life Performance Benchmark ===\n");
    for algorithm in Algorithm::all() {
        println!("{:>10}: {}", algorithm.name(), algorithm.description());
    }
    println!();

    let sizes = [25, 100, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(Algorithm::Serial, size, iterations)?;
        let parallel_ms = benchmark(Algorithm::Parallel, size, iterations)?;

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let size = 2000;
    let cells = size * size;
    let parallel_ms = benchmark(Algorithm::Parallel, size, iterations)?;
    println!(
        "\nParallel at {size}x{size}: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        (cells as f64) / (parallel_ms / 1000.0) / 1_000_000.0
    );
    Ok(())
}
