//! Fibmark Benchmark Runner
//!
//! Standalone binary for timing the naive Fibonacci workload at several
//! input sizes, with JSON/CSV output and peak memory tracking.  Criterion
//! benches live under `benches/`; this runner is for quick comparisons and
//! machine-readable reports.

use fibmark_core::{fib, fib_iterative, BENCH_N};
use serde::Serialize;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Result of a single benchmark run.
#[derive(Debug, Clone, Serialize)]
pub struct BenchResult {
    pub name: String,
    pub n: u32,
    pub result: u64,
    pub recursive_calls: u64,
    pub duration_ms: f64,
    pub throughput_calls_per_sec: f64,
    pub peak_rss_kb: Option<u64>,
    pub iterations: u32,
}

/// Read peak RSS from /proc/self/status on Linux.
/// Returns None on non-Linux or if the file cannot be parsed.
pub fn peak_rss_kb() -> Option<u64> {
    #[cfg(target_os = "linux")]
    {
        let status = std::fs::read_to_string("/proc/self/status").ok()?;
        parse_rss_field(&status, &["VmPeak:", "VmHWM:"])
    }
    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

/// Pull the first matching kB field out of a /proc/self/status dump.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_rss_field(status: &str, prefixes: &[&str]) -> Option<u64> {
    for line in status.lines() {
        if prefixes.iter().any(|p| line.starts_with(p)) {
            // Format: "VmHWM:   123456 kB"
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() >= 2 {
                return parts[1].parse::<u64>().ok();
            }
        }
    }
    None
}

/// Number of calls the naive recursion makes for input `n`.
///
/// `calls(0) = calls(1) = 1` and `calls(k) = 1 + calls(k-1) + calls(k-2)`,
/// which closes to `2 * fib(n+1) - 1`.  This is the natural throughput unit
/// for a workload that exists to stress call overhead.
pub fn recursive_calls(n: u32) -> u64 {
    2 * fib_iterative(n + 1).unwrap_or(0) - 1
}

/// Time `iterations` runs of `fib(n)`, returning the total elapsed time.
fn time_fib(n: u32, iterations: u32) -> Duration {
    let mut total = Duration::ZERO;
    for _ in 0..iterations {
        let start = Instant::now();
        black_box(fib(black_box(n)));
        total += start.elapsed();
    }
    total
}

/// Run a single benchmark point and produce a BenchResult.
fn run_bench(name: &str, n: u32, iterations: u32) -> BenchResult {
    // Warm up
    time_fib(n, 1);

    let total = time_fib(n, iterations);
    let rss_after = peak_rss_kb();

    let avg_duration = total.as_secs_f64() / f64::from(iterations);
    let calls = recursive_calls(n);

    BenchResult {
        name: name.to_string(),
        n,
        result: fib(n),
        recursive_calls: calls,
        duration_ms: avg_duration * 1000.0,
        throughput_calls_per_sec: calls as f64 / avg_duration,
        peak_rss_kb: rss_after,
        iterations,
    }
}

fn print_csv_header() {
    println!("name,n,result,recursive_calls,duration_ms,calls_per_sec,peak_rss_kb,iterations");
}

fn print_csv_row(r: &BenchResult) {
    println!(
        "{},{},{},{},{:.3},{:.0},{},{}",
        r.name,
        r.n,
        r.result,
        r.recursive_calls,
        r.duration_ms,
        r.throughput_calls_per_sec,
        r.peak_rss_kb.map_or("N/A".to_string(), |v| v.to_string()),
        r.iterations,
    );
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let output_format = args.get(1).map(|s| s.as_str()).unwrap_or("text");
    let iterations: u32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(5);

    // Smaller inputs give quick sanity points; BENCH_N is the anchor the
    // cross-language baselines compare against.
    let points = [
        ("fib_small", 20),
        ("fib_medium", 25),
        ("fib_large", 30),
        ("fib_bench", BENCH_N),
    ];

    let mut results: Vec<BenchResult> = Vec::new();
    for (name, n) in points {
        results.push(run_bench(name, n, iterations));
    }

    match output_format {
        "csv" => {
            print_csv_header();
            for r in &results {
                print_csv_row(r);
            }
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&results).unwrap());
        }
        _ => {
            println!("Fibmark Benchmarks");
            println!("==================");
            println!();
            for r in &results {
                println!(
                    "[{}] n={} -> {} | {:.3}ms avg ({} iters) | {:.0} calls/s | RSS: {}",
                    r.name,
                    r.n,
                    r.result,
                    r.duration_ms,
                    r.iterations,
                    r.throughput_calls_per_sec,
                    r.peak_rss_kb
                        .map_or("N/A".to_string(), |v| format!("{}kB", v)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_counts() {
        assert_eq!(recursive_calls(0), 1);
        assert_eq!(recursive_calls(1), 1);
        // calls(2) = 1 + calls(1) + calls(0) = 3
        assert_eq!(recursive_calls(2), 3);
        assert_eq!(recursive_calls(5), 15);
    }

    #[test]
    fn rss_field_parsing() {
        let status = "VmSize:\t  101 kB\nVmHWM:\t   2048 kB\nVmRSS:\t   1024 kB\n";
        assert_eq!(parse_rss_field(status, &["VmPeak:", "VmHWM:"]), Some(2048));
        assert_eq!(parse_rss_field(status, &["VmRSS:"]), Some(1024));
        assert_eq!(parse_rss_field(status, &["VmPeak:"]), None);
    }

    #[test]
    fn result_serializes() {
        let r = run_bench("fib_tiny", 10, 2);
        assert_eq!(r.result, 55);
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"n\":10"));
        assert!(json.contains("\"result\":55"));
    }
}
