// Opt-in runtime harness. Run with: cargo bench --bench runtime
use std::hint::black_box;
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use fpdiff::cli::args::Args;
use fpdiff::orchestrator;
use fpdiff::source::byte_order::ByteOrder;
use tempfile::NamedTempFile;

struct Case {
    name: &'static str,
    len: usize,
    perturb: f32,
}

fn main() {
    let iterations = env_u64("FPDIFF_RUNTIME_ITERS", 20);
    let warmup = env_u64("FPDIFF_RUNTIME_WARMUP", 2);
    let budget_ms = env_f64("FPDIFF_RUNTIME_BUDGET_MS");

    println!("fpdiff runtime harness");
    println!("iterations={iterations} warmup={warmup}");
    if let Some(budget) = budget_ms {
        println!("budget_ms={budget}");
    }

    let cases = [
        Case {
            name: "identical_1m",
            len: 1_000_000,
            perturb: 0.0,
        },
        Case {
            name: "perturbed_1m",
            len: 1_000_000,
            perturb: 1e-4,
        },
    ];

    let mut failed = false;
    for case in &cases {
        let avg_ms = run_case(case, iterations, warmup);
        if let Some(budget) = budget_ms
            && avg_ms > budget
        {
            eprintln!(
                "budget exceeded for {}: avg_ms={:.3} budget_ms={:.3}",
                case.name, avg_ms, budget
            );
            failed = true;
        }
    }

    if failed {
        std::process::exit(1);
    }
}

fn run_case(case: &Case, iterations: u64, warmup: u64) -> f64 {
    let first = write_sequence(case.len, 0.0);
    let second = write_sequence(case.len, case.perturb);
    let args = Args::new(
        PathBuf::from(first.path()),
        PathBuf::from(second.path()),
        ByteOrder::Native,
    );

    for _ in 0..warmup {
        let result = orchestrator::run(&args).expect("warmup run failed");
        black_box(result);
    }

    let mut total = Duration::ZERO;
    for _ in 0..iterations {
        let start = Instant::now();
        let result = orchestrator::run(&args).expect("timed run failed");
        black_box(result);
        total += start.elapsed();
    }

    let total_ms = total.as_secs_f64() * 1000.0;
    let avg_ms = if iterations == 0 {
        0.0
    } else {
        total_ms / iterations as f64
    };

    println!(
        "case {}: avg_ms={:.3} total_ms={:.3}",
        case.name, avg_ms, total_ms
    );

    avg_ms
}

fn write_sequence(len: usize, perturb: f32) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    let bytes: Vec<u8> = (0..len)
        .flat_map(|i| {
            let base = (i as f32 * 0.37).sin();
            (base * (1.0 + perturb)).to_ne_bytes()
        })
        .collect();
    file.write_all(&bytes).expect("write sequence");
    file
}

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_f64(name: &str) -> Option<f64> {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| *value > 0.0)
}
