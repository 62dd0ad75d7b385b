use std::env;
use std::time::Instant;

use discrete_frechet::{
    discrete_frechet_within, metrics::SquaredEuclidean, FrechetEngine, Metric, RowLayout,
};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

type Point = [f64; 2];

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("frechet_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Discrete Fréchet Scaling Probe");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Runs the rolling-row engine over deterministic trajectories of growing size.");
    eprintln!(
        "  • Correctness: results match a full-table baseline (up to size {})",
        options.verify_limit
    );
    eprintln!("  • wall_s: wall-clock time in seconds");
    eprintln!("  • rss_delta_kib: resident memory delta in KiB");
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/4] Square inputs, P as inner dimension...");
    measurements.extend(run_square(&options, &mut sys));
    eprintln!();

    eprintln!("[2/4] Skewed inputs, shorter trajectory as inner dimension...");
    measurements.extend(run_skewed(&options, &mut sys));
    eprintln!();

    eprintln!("[3/4] Single-point probe against long trajectories...");
    measurements.extend(run_singleton(&options, &mut sys));
    eprintln!();

    eprintln!("[4/4] Threshold decision at the exact distance...");
    measurements.extend(run_decision(&options, &mut sys));
    eprintln!();

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("frechet_probe output error: {err}");
        std::process::exit(1);
    }
    if measurements
        .iter()
        .any(|m| matches!(m.verification_status, VerificationStatus::Failed))
    {
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 1024usize;

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
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = parse_limit(value)?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = parse_limit(&value)?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --features probe --bin frechet_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Largest trajectory length checked against the full-table baseline (default: 1024)
  -h, --help                    Print this help message

Examples:
  cargo run --release --features probe --bin frechet_probe
  cargo run --release --features probe --bin frechet_probe -- --format table --verify-limit 512
"
        );
    }
}

fn parse_limit(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| "verify limit must be a positive integer".to_string())
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
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

struct Measurement {
    scenario: &'static str,
    size_desc: String,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

fn verify(expected: f64, got: f64) -> (VerificationStatus, Option<String>) {
    if expected.total_cmp(&got).is_eq() {
        (VerificationStatus::Passed, None)
    } else {
        (
            VerificationStatus::Failed,
            Some(format!("expected {expected}, got {got}")),
        )
    }
}

fn run_square(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[64, 256, 1024, 2048, 4096, 8192];
    let engine = FrechetEngine::new(SquaredEuclidean);
    SIZES
        .iter()
        .map(|&len| {
            eprint!("      len={len}... ");
            let mut result = 0.0;
            let m = measure("rolling_square", format!("len={len}"), sys, || {
                let p = wave(len, 0);
                let q = wave(len, 3);
                let d = match engine.distance(&p, &q) {
                    Ok(d) => d,
                    Err(err) => return (VerificationStatus::Failed, Some(err.to_string())),
                };
                result = d;
                if len <= options.verify_limit {
                    verify(full_table(&p, &q), d)
                } else {
                    (VerificationStatus::NotChecked, None)
                }
            });
            report(&m, result);
            m
        })
        .collect()
}

fn run_skewed(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[(usize, usize)] = &[(16_384, 16), (65_536, 32), (262_144, 64)];
    let engine = FrechetEngine::with_layout(SquaredEuclidean, RowLayout::Shorter);
    SIZES
        .iter()
        .map(|&(long, short)| {
            eprint!("      {long}x{short}... ");
            let mut result = 0.0;
            let m = measure("rolling_skewed", format!("{long}x{short}"), sys, || {
                let p = wave(long, 1);
                let q = wave(short, 5);
                let d = match engine.distance(&p, &q) {
                    Ok(d) => d,
                    Err(err) => return (VerificationStatus::Failed, Some(err.to_string())),
                };
                result = d;
                if long * short <= options.verify_limit * options.verify_limit {
                    verify(full_table(&p, &q), d)
                } else {
                    (VerificationStatus::NotChecked, None)
                }
            });
            report(&m, result);
            m
        })
        .collect()
}

fn run_singleton(_options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[1 << 12, 1 << 16, 1 << 20];
    let engine = FrechetEngine::new(SquaredEuclidean);
    SIZES
        .iter()
        .map(|&len| {
            eprint!("      len={len}... ");
            let mut result = 0.0;
            let m = measure("singleton", format!("len={len}"), sys, || {
                let p = [[0.5, 0.5]];
                let q = wave(len, 2);
                let d = match engine.distance(&p, &q) {
                    Ok(d) => d,
                    Err(err) => return (VerificationStatus::Failed, Some(err.to_string())),
                };
                result = d;
                let expected = q
                    .iter()
                    .map(|b| squared(&p[0], b))
                    .fold(f64::NEG_INFINITY, f64::max);
                verify(expected, d)
            });
            report(&m, result);
            m
        })
        .collect()
}

fn run_decision(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[256, 1024, 4096];
    let engine = FrechetEngine::new(SquaredEuclidean);
    SIZES
        .iter()
        .map(|&len| {
            eprint!("      len={len}... ");
            let p = wave(len, 0);
            let q = wave(len, 7);
            let exact = engine.distance(&p, &q).unwrap_or(f64::NAN);
            let m = measure("decision", format!("len={len}"), sys, || {
                let at = discrete_frechet_within(&p, &q, exact, |a, b| {
                    SquaredEuclidean.distance(a, b)
                });
                let below = discrete_frechet_within(&p, &q, exact * 0.99, |a, b| {
                    SquaredEuclidean.distance(a, b)
                });
                match (at, below) {
                    (Ok(true), Ok(below)) if !below || exact == 0.0 => {
                        if len <= options.verify_limit {
                            (VerificationStatus::Passed, None)
                        } else {
                            (VerificationStatus::NotChecked, None)
                        }
                    }
                    other => (
                        VerificationStatus::Failed,
                        Some(format!("inconsistent decision at {exact}: {other:?}")),
                    ),
                }
            });
            report(&m, exact);
            m
        })
        .collect()
}

fn report(m: &Measurement, value: f64) {
    eprintln!(
        "{} distance={:.4}, time={:.3}s, status={}",
        m.verification_status.icon(),
        value,
        m.wall_s,
        m.verification_status.label()
    );
}

fn measure<F>(scenario: &'static str, size_desc: String, sys: &mut System, compute: F) -> Measurement
where
    F: FnOnce() -> (VerificationStatus, Option<String>),
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let (status, detail) = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    Measurement {
        scenario,
        size_desc,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification_status: status,
        verification_detail: detail,
    }
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    eprintln!("{}", "=".repeat(80));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(80));

    let count = |status: fn(&VerificationStatus) -> bool| {
        measurements
            .iter()
            .filter(|m| status(&m.verification_status))
            .count()
    };
    let passed = count(|s| matches!(s, VerificationStatus::Passed));
    let failed = count(|s| matches!(s, VerificationStatus::Failed));
    let not_checked = count(|s| matches!(s, VerificationStatus::NotChecked));

    eprintln!("  Total runs: {}", measurements.len());
    eprintln!("  ✓ Passed: {passed}");
    eprintln!("  ✗ Failed: {failed}");
    eprintln!(
        "  ○ Not checked (size > {}): {not_checked}",
        options.verify_limit
    );

    for m in measurements {
        if let (VerificationStatus::Failed, Some(detail)) =
            (m.verification_status, m.verification_detail.as_ref())
        {
            eprintln!("  ✗ {} ({}): {}", m.scenario, m.size_desc, detail);
        }
    }
    eprintln!();
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,size_desc,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{:.3},{},{},\"{}\"",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let col1 = measurements
        .iter()
        .map(|m| m.scenario.len())
        .max()
        .unwrap_or(0)
        .max("scenario".len());
    let col2 = measurements
        .iter()
        .map(|m| m.size_desc.len())
        .max()
        .unwrap_or(0)
        .max("size".len());

    println!(
        "{:<col1$}  {:<col2$}  {:>10}  {:>14}  {:>12}",
        "scenario", "size", "wall_s", "rss_delta_kib", "status"
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:<col2$}  {:>10.3}  {:>14}  {:>12}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label()
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = m.verification_detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"scenario\":\"{}\",\"size\":\"{}\",\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

/// Deterministic zig-zag trajectory; `phase` shifts the pattern.
fn wave(len: usize, phase: usize) -> Vec<Point> {
    (0..len)
        .map(|i| {
            let y = ((i + phase) * 7 % 13) as f64 / 4.0;
            [i as f64 * 0.5, y]
        })
        .collect()
}

fn squared(a: &Point, b: &Point) -> f64 {
    let (dx, dy) = (a[0] - b[0], a[1] - b[1]);
    dx * dx + dy * dy
}

/// Quadratic-space reference table.
fn full_table(p: &[Point], q: &[Point]) -> f64 {
    let (m, n) = (p.len(), q.len());
    let mut cr = vec![vec![0.0f64; n]; m];
    for i in 0..m {
        for j in 0..n {
            let d = squared(&p[i], &q[j]);
            cr[i][j] = match (i, j) {
                (0, 0) => d,
                (_, 0) => cr[i - 1][0].max(d),
                (0, _) => cr[0][j - 1].max(d),
                _ => cr[i - 1][j].min(cr[i - 1][j - 1]).min(cr[i][j - 1]).max(d),
            };
        }
    }
    cr[m - 1][n - 1]
}
