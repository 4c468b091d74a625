/// Pure Rust core benchmarks for the flood generator.
///
/// Uses std::time::Instant for timing, a deterministic LCG PRNG for data generation,
/// and std::hint::black_box to prevent dead-code elimination.
use std::hint::black_box;
use std::time::{Duration, Instant};

use rational_core::{Basin, Distribution, Shape};

const REPEATS: usize = 7;

/// Simple LCG PRNG for a deterministic cumulative rainfall curve of `n` points.
fn make_rain(n: usize, seed: u64) -> Distribution {
    let mut state = seed;
    let mut next_f64 = || -> f64 {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as f64 / (1u64 << 31) as f64
    };

    let mut depth = 0.0;
    let points: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            depth += next_f64() * 0.05;
            (i as f64, depth)
        })
        .collect();
    Distribution::new(points).unwrap_or_else(|e| panic!("bench rainfall invalid: {e}"))
}

/// Run a closure `REPEATS` times, return the median duration.
fn median_time<F: FnMut()>(mut f: F) -> Duration {
    let mut times: Vec<Duration> = (0..REPEATS)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    times.sort();
    times[REPEATS / 2]
}

fn bench_hydrograph(basin: &Basin, sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let mut results = Vec::new();

    for &n in sizes {
        let rain = make_rain(n, 42);

        // Warmup
        let _ = black_box(basin.flood_hydrograph(&rain, 0.5));

        let dur = median_time(|| {
            let _ = black_box(basin.flood_hydrograph(&rain, 0.5));
        });
        results.push(("hydrograph", n, dur));
    }
    results
}

fn bench_table(basin: &Basin, sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let mut results = Vec::new();

    for &n in sizes {
        let rain = make_rain(n, 7);

        // Warmup
        let _ = black_box(basin.flood_table(&rain, 0.5));

        let dur = median_time(|| {
            let _ = black_box(basin.flood_table(&rain, 0.5));
        });
        results.push(("table", n, dur));
    }
    results
}

fn main() {
    let basin = Basin::with_shapes(
        20.0,
        35.0,
        0.45,
        &[Shape::new(4.0, 0.95), Shape::new(12.5, 0.2)],
    )
    .unwrap_or_else(|e| panic!("bench basin invalid: {e}"));

    println!("Pure Rust Core Benchmarks");
    println!("============================================================");
    println!("{:<18} {:>8}   {:>12}", "Case", "N", "Median (ms)");
    println!("--------------------------------------------");

    let mut all_results: Vec<(&str, usize, Duration)> = Vec::new();

    all_results.extend(bench_hydrograph(&basin, &[1_440, 14_400, 144_000]));
    all_results.extend(bench_table(&basin, &[1_440, 14_400]));

    for (case, n, dur) in &all_results {
        let ms = dur.as_secs_f64() * 1000.0;
        println!("{:<18} {:>8}      {:>8.3}", case, n, ms);
    }

    println!("============================================================");
}
