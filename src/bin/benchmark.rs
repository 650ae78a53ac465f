use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use heapsort_lab::config::BenchConfig;
use heapsort_lab::iterative::is_sorted;
use heapsort_lab::logging::init_logger;
use heapsort_lab::{Algorithm, Sorter};
use log::{info, warn};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::Serialize;

/// Verify and time sorting algorithms on seeded random input.
#[derive(Parser)]
#[command(name = "benchmark")]
struct Cli {
    /// Algorithm to run (repeatable). Runs every algorithm when omitted.
    #[arg(short, long = "algorithm", value_enum)]
    algorithms: Vec<Algorithm>,

    /// JSON config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of elements per input array
    #[arg(short, long)]
    size: Option<usize>,

    /// Timed runs per algorithm
    #[arg(short, long)]
    iterations: Option<u32>,

    /// Buckets used by bucket_sort
    #[arg(long)]
    buckets: Option<usize>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct BenchmarkResult {
    name: Algorithm,
    ops_per_second: f64,
    avg_ns: f64,
    correct: bool,
    skipped: bool,
}

#[derive(Serialize)]
struct FullResults {
    config: BenchConfig,
    results: Vec<BenchmarkResult>,
    correctness: bool,
}

fn generate_random_data(seed: u64, config: &BenchConfig) -> Vec<i64> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (0..config.array_size)
        .map(|_| rng.gen_range(config.min_value..=config.max_value))
        .collect()
}

fn verify_sort(sorter: &dyn Sorter, config: &BenchConfig, seeds: &[u64]) -> bool {
    for &seed in seeds {
        let mut data = generate_random_data(seed, config);
        let mut expected = data.clone();
        expected.sort_unstable();
        sorter.sort(&mut data);
        if data != expected {
            warn!("{} produced wrong output for seed {}", sorter.name(), seed);
            return false;
        }
    }

    // Edge cases
    let mut empty: Vec<i64> = vec![];
    sorter.sort(&mut empty);

    let mut single = vec![42i64];
    sorter.sort(&mut single);

    let mut two = vec![5i64, 3];
    sorter.sort(&mut two);
    if two != vec![3, 5] {
        return false;
    }

    let mut reverse: Vec<i64> = (0..config.array_size as i64).rev().collect();
    sorter.sort(&mut reverse);
    is_sorted(&reverse)
}

fn benchmark_sorter(
    name: Algorithm,
    sorter: &dyn Sorter,
    config: &BenchConfig,
    seeds: &[u64],
) -> BenchmarkResult {
    if sorter.is_quadratic() && config.array_size > config.quadratic_limit {
        info!(
            "Skipping {} (quadratic, {} > {} elements)",
            name, config.array_size, config.quadratic_limit
        );
        return BenchmarkResult {
            name,
            ops_per_second: 0.0,
            avg_ns: 0.0,
            correct: true,
            skipped: true,
        };
    }

    // Verify correctness first
    let correct = verify_sort(sorter, config, seeds);

    if !correct {
        return BenchmarkResult {
            name,
            ops_per_second: 0.0,
            avg_ns: f64::INFINITY,
            correct: false,
            skipped: false,
        };
    }

    // Warmup
    for &seed in seeds.iter().take(config.warmup_iterations as usize) {
        let mut data = generate_random_data(seed, config);
        sorter.sort(&mut data);
    }

    // Benchmark
    let mut total_time = Duration::ZERO;
    let mut iterations = 0u32;

    for &seed in seeds.iter().cycle().take(config.bench_iterations as usize) {
        let mut data = generate_random_data(seed, config);

        let start = Instant::now();
        sorter.sort(std::hint::black_box(&mut data));
        total_time += start.elapsed();
        iterations += 1;
    }

    let avg_ns = total_time.as_nanos() as f64 / iterations as f64;
    let ops_per_second = 1_000_000_000.0 / avg_ns;
    info!("{}: {:.0} ns/sort", name, avg_ns);

    BenchmarkResult {
        name,
        ops_per_second,
        avg_ns,
        correct,
        skipped: false,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => BenchConfig::load(path)
            .with_context(|| format!("Failed to load benchmark config {}", path.display()))?,
        None => BenchConfig::default(),
    };
    if let Some(size) = cli.size {
        config.array_size = size;
    }
    if let Some(iterations) = cli.iterations {
        config.bench_iterations = iterations;
    }
    if let Some(buckets) = cli.buckets {
        config.bucket_count = buckets;
    }
    config.validate().context("Invalid benchmark settings")?;
    let buckets = config.buckets()?;

    let algorithms = if cli.algorithms.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        cli.algorithms.clone()
    };

    // Generate seeds for reproducible benchmarks
    let seeds = config.seeds();
    info!(
        "Running {} algorithm(s) on {} elements, {} iterations",
        algorithms.len(),
        config.array_size,
        config.bench_iterations
    );

    let mut results = Vec::with_capacity(algorithms.len());
    let mut all_correct = true;

    for algorithm in algorithms {
        let sorter = algorithm.sorter_with_buckets(buckets);
        let result = benchmark_sorter(algorithm, sorter.as_ref(), &config, &seeds);
        all_correct &= result.correct;
        results.push(result);
    }

    let full_results = FullResults {
        config,
        results,
        correctness: all_correct,
    };

    let json = if cli.pretty {
        serde_json::to_string_pretty(&full_results)?
    } else {
        serde_json::to_string(&full_results)?
    };
    println!("{}", json);

    if !all_correct {
        warn!("At least one algorithm produced unsorted output");
    }
    Ok(())
}
