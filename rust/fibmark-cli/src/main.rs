//! fibmark CLI — standalone variant of the Fibonacci benchmark.
//!
//! The bare invocation is the benchmark contract: compute `fib(35)`, discard
//! the result, exit 0, print nothing.  External harnesses measure wall-clock
//! time around the process.  The `run` and `bench` subcommands exist for
//! local poking: `run` prints the value, `bench` reproduces the local timing
//! loop with per-run statistics.

use clap::{Parser, Subcommand};
use fibmark_core::{fib, fib_checked, BENCH_N};
use std::hint::black_box;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "fibmark", version, about = "CPU-bound Fibonacci micro-benchmark")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute fibonacci(n) and print the result
    Run {
        /// Input to the recursion
        #[arg(long, default_value_t = i64::from(BENCH_N))]
        n: i64,

        /// Print the computed value (silent otherwise)
        #[arg(long)]
        verbose: bool,
    },
    /// Time repeated fibonacci(n) runs and report statistics
    Bench {
        /// Input to the recursion
        #[arg(long, default_value_t = i64::from(BENCH_N))]
        n: i64,

        /// Number of timed runs
        #[arg(long, default_value_t = 5)]
        runs: u32,
    },
}

/// Timing statistics over a set of runs, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Stats {
    avg_ms: f64,
    min_ms: f64,
    max_ms: f64,
}

fn stats(times_ms: &[f64]) -> Option<Stats> {
    if times_ms.is_empty() {
        return None;
    }
    let sum: f64 = times_ms.iter().sum();
    let min = times_ms.iter().copied().fold(f64::INFINITY, f64::min);
    let max = times_ms.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(Stats {
        avg_ms: sum / times_ms.len() as f64,
        min_ms: min,
        max_ms: max,
    })
}

fn cmd_run(n: i64, verbose: bool) -> Result<(), fibmark_core::FibError> {
    let result = fib_checked(n)?;
    if verbose {
        println!("fibonacci({n})={result}");
    } else {
        black_box(result);
    }
    Ok(())
}

fn cmd_bench(n: i64, runs: u32) -> Result<(), fibmark_core::FibError> {
    // Validate the input once up front; the timed loop uses the raw recursion.
    fib_checked(n)?;
    let n = u32::try_from(n).unwrap_or(BENCH_N);

    // Warm-up run, untimed.
    black_box(fib(n.min(10)));

    let mut times_ms = Vec::with_capacity(runs as usize);
    for i in 1..=runs {
        let start = Instant::now();
        let result = black_box(fib(black_box(n)));
        let ms = start.elapsed().as_secs_f64() * 1000.0;
        times_ms.push(ms);
        println!("run {i}: {ms:.2}ms (fibonacci({n})={result})");
    }

    if let Some(s) = stats(&times_ms) {
        println!();
        println!("avg: {:.2}ms  min: {:.2}ms  max: {:.2}ms", s.avg_ms, s.min_ms, s.max_ms);
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        // Bare invocation: the benchmark path. Compute and discard.
        None => {
            black_box(fib(black_box(BENCH_N)));
            Ok(())
        }
        Some(Commands::Run { n, verbose }) => cmd_run(n, verbose),
        Some(Commands::Bench { n, runs }) => cmd_bench(n, runs),
    };

    if let Err(e) = outcome {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
