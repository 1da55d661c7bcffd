use std::env;
use std::time::Instant;

use algo_trace::gallery::{Demo, DemoReport};
use algo_trace::problems::copper_rods::optimal_value;
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("trace_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(72));
    eprintln!("Trace probe: every demo with seeded default inputs");
    eprintln!("{}", "=".repeat(72));
    eprintln!("  seed: {}", options.seed);
    match options.limit {
        Some(n) => eprintln!("  step limit: {n}"),
        None => eprintln!("  step limit: default for each width"),
    }
    eprintln!("  status: 'passed' = best value matches a reference computation");
    eprintln!();

    let mut rng = StdRng::seed_from_u64(options.seed);
    let demos = Demo::defaults(&mut rng);
    let mut sys = System::new();
    let total = demos.len();

    let measurements: Vec<Measurement> = demos
        .iter()
        .enumerate()
        .map(|(idx, demo)| {
            eprint!("  [{}/{}] {}... ", idx + 1, total, demo.title());
            let m = measure(demo, options.limit, &mut sys);
            let icon = match m.status {
                Status::Passed => "✓",
                Status::Failed => "✗",
                Status::Aborted => "○",
            };
            eprintln!(
                "{icon} steps={}, best={}, time={:.4}s",
                m.steps,
                m.best.map_or_else(|| "-".to_string(), |b| b.to_string()),
                m.wall_s
            );
            m
        })
        .collect();

    eprintln!();
    if let Err(err) = options.format.write(&measurements) {
        eprintln!("trace_probe output error: {err}");
        std::process::exit(1);
    }
    if measurements.iter().any(|m| m.status == Status::Failed) {
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    seed: u64,
    limit: Option<usize>,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Table;
        let mut seed = 42u64;
        let mut limit = None;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--seed=") {
                seed = parse_seed(value)?;
            } else if arg == "--seed" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --seed".to_string())?
                    .into();
                seed = parse_seed(&value)?;
            } else if let Some(value) = arg.strip_prefix("--limit=") {
                limit = Some(parse_limit(value)?);
            } else if arg == "--limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --limit".to_string())?
                    .into();
                limit = Some(parse_limit(&value)?);
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            seed,
            limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin trace_probe [-- <options>]

Options:
  --format <table|csv|json>     Output format (default: table)
  --seed <N>                    Seed for the default inputs (default: 42)
  --limit <N>                   Step limit for every demo (default: per-width bound)
  -h, --help                    Print this help message
"
        );
    }
}

fn parse_seed(value: &str) -> Result<u64, String> {
    value
        .parse::<u64>()
        .map_err(|_| "seed must be a non-negative integer".to_string())
}

fn parse_limit(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err("limit must be a positive integer".to_string()),
    }
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => {
                println!("demo,steps,terminals,cached,best,wall_s,rss_delta_kib,status");
                for m in measurements {
                    println!(
                        "{},{},{},{},{},{:.6},{},{}",
                        m.demo,
                        m.steps,
                        m.terminals,
                        m.cached,
                        m.best.map_or_else(String::new, |b| b.to_string()),
                        m.wall_s,
                        m.rss_delta_kib,
                        m.status.label()
                    );
                }
                Ok(())
            }
            OutputFormat::Table => {
                println!(
                    "{:<28} {:>8} {:>9} {:>7} {:>8} {:>10} {:>8}",
                    "demo", "steps", "terminals", "cached", "best", "wall_s", "status"
                );
                for m in measurements {
                    println!(
                        "{:<28} {:>8} {:>9} {:>7} {:>8} {:>10.6} {:>8}",
                        m.demo,
                        m.steps,
                        m.terminals,
                        m.cached,
                        m.best.map_or_else(|| "-".to_string(), |b| b.to_string()),
                        m.wall_s,
                        m.status.label()
                    );
                }
                Ok(())
            }
            OutputFormat::Json => {
                let body = serde_json::to_string_pretty(measurements).map_err(|e| e.to_string())?;
                println!("{body}");
                Ok(())
            }
        }
    }
}

#[derive(Serialize)]
struct Measurement {
    demo: &'static str,
    steps: usize,
    terminals: usize,
    cached: usize,
    best: Option<i64>,
    wall_s: f64,
    rss_delta_kib: u64,
    status: Status,
    detail: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum Status {
    Passed,
    Failed,
    Aborted,
}

impl Status {
    fn label(&self) -> &'static str {
        match self {
            Status::Passed => "passed",
            Status::Failed => "failed",
            Status::Aborted => "aborted",
        }
    }
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new().with_memory());
    match get_current_pid() {
        Ok(pid) => sys.process(pid).map_or(0, |p| p.memory() / 1024),
        Err(_) => 0,
    }
}

fn measure(demo: &Demo, limit: Option<usize>, sys: &mut System) -> Measurement {
    let before = rss_kib(sys);
    let start = Instant::now();
    let result = demo.report_with_limit(limit);
    let wall_s = start.elapsed().as_secs_f64();
    let after = rss_kib(sys);

    match result {
        Ok(report) => {
            let expected = reference_best(demo);
            let (status, detail) = verify(&report, expected);
            Measurement {
                demo: report.title,
                steps: report.steps,
                terminals: report.terminals,
                cached: report.cached,
                best: report.best,
                wall_s,
                rss_delta_kib: after.saturating_sub(before),
                status,
                detail,
            }
        }
        Err(err) => Measurement {
            demo: demo.title(),
            steps: 0,
            terminals: 0,
            cached: 0,
            best: None,
            wall_s,
            rss_delta_kib: after.saturating_sub(before),
            status: Status::Aborted,
            detail: Some(err.to_string()),
        },
    }
}

fn verify(report: &DemoReport, expected: Option<i64>) -> (Status, Option<String>) {
    if report.best == expected {
        (Status::Passed, None)
    } else {
        (
            Status::Failed,
            Some(format!("expected {expected:?}, got {:?}", report.best)),
        )
    }
}

/// Best value each demo must report, computed without the trace engine.
fn reference_best(demo: &Demo) -> Option<i64> {
    match demo {
        Demo::BinarySearch { inputs, target } => {
            // the terminal value is the element at the final midpoint
            if inputs.is_empty() {
                None
            } else if inputs.contains(target) {
                Some(*target)
            } else {
                let mut low = 0usize;
                let mut high = inputs.len() - 1;
                loop {
                    let mid = low + (high - low) / 2;
                    if low >= high || inputs[mid] == *target {
                        return Some(inputs[mid]);
                    }
                    if *target < inputs[mid] {
                        high = mid.saturating_sub(1).max(low);
                    } else {
                        low = (mid + 1).min(high);
                    }
                }
            }
        }
        Demo::LisExponential { inputs } | Demo::LisPolynomial { inputs } => {
            Some(longest_non_decreasing(inputs) as i64)
        }
        Demo::Kadane { inputs } | Demo::BruteMaxSubarray { inputs, .. } => max_contiguous(inputs),
        Demo::CopperRods { prices, length } => optimal_value(prices, *length),
    }
}

fn longest_non_decreasing(xs: &[i64]) -> usize {
    let mut dp = vec![1usize; xs.len()];
    for i in 0..xs.len() {
        for j in 0..i {
            if xs[j] <= xs[i] {
                dp[i] = dp[i].max(dp[j] + 1);
            }
        }
    }
    dp.into_iter().max().unwrap_or(0)
}

/// Maximum over every window, the empty one (sum 0) included.
fn max_contiguous(xs: &[i64]) -> Option<i64> {
    (0..xs.len())
        .flat_map(|i| (i + 1..=xs.len()).map(move |j| (i, j)))
        .map(|(i, j)| xs[i..j].iter().sum::<i64>())
        .fold(Some(0), |best, sum| best.map(|b| b.max(sum)))
}
