use std::collections::BTreeMap;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use subseq_max::strategies::memoized::KSubsequenceMaximizer;
use subseq_max::{maximize_pair, select_k, DigitSequence};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

/// Scaling probe: runs every strategy over growing deterministic inputs,
/// checks each result against an independent baseline, and reports wall
/// time and resident-memory delta.
#[derive(Parser, Debug)]
#[command(name = "scale_probe", about)]
struct Options {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Largest sequence length verified against a baseline.
    #[arg(long, default_value_t = 4096)]
    verify_limit: usize,

    /// Digits selected by the general strategies.
    #[arg(short = 'k', long = "count", default_value_t = 12)]
    count: usize,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

#[derive(Clone, Serialize)]
struct Measurement {
    scenario: &'static str,
    size: String,
    value: u64,
    wall_s: f64,
    rss_delta_kib: u64,
    verification: Verification,
}

#[derive(Clone, Serialize)]
struct Verification {
    status: VerificationStatus,
    detail: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

const PAIR_SIZES: &[usize] = &[16, 64, 256, 1024, 4096, 16384, 65536];
const MEMO_SIZES: &[usize] = &[16, 32, 64, 128, 256, 512, 1024];
const TABLE_SIZES: &[usize] = &[16, 64, 256, 1024, 4096, 16384, 65536];

fn main() {
    let options = Options::parse();
    if options.count == 0 || options.count > subseq_max::utils::MAX_SELECT {
        eprintln!(
            "scale_probe: --count must be in 1..={}",
            subseq_max::utils::MAX_SELECT
        );
        std::process::exit(2);
    }
    let k = options.count;

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Digit-selection scaling probe");
    eprintln!("{}", "=".repeat(80));
    eprintln!("  • pair      : K=2, checked against all (i, j) pairs");
    eprintln!("  • memoized  : K={k}, checked against greedy leftmost-maximum selection");
    eprintln!("  • table     : K={k}, checked against greedy and its own reconstructed indices");
    eprintln!("  • verification up to length {}", options.verify_limit);
    eprintln!("{}\n", "=".repeat(80));

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/3] Pair maximizer");
    measurements.extend(run_scenario("pair", PAIR_SIZES, &options, &mut sys, |seq, verify| {
        let value = maximize_pair(seq);
        let check = verify.then(|| compare(pair_baseline(seq), value));
        (value, check)
    }));

    eprintln!("[2/3] Memoized K-subsequence maximizer");
    measurements.extend(run_scenario("memoized", MEMO_SIZES, &options, &mut sys, |seq, verify| {
        let k = k.min(seq.len());
        let mut query = KSubsequenceMaximizer::new(seq, k);
        let value = query.solve();
        let check = verify.then(|| compare(greedy_baseline(seq, k), value));
        (value, check)
    }));

    eprintln!("[3/3] Layered table maximizer");
    measurements.extend(run_scenario("table", TABLE_SIZES, &options, &mut sys, |seq, verify| {
        let k = k.min(seq.len());
        let sel = select_k(seq, k);
        let check = verify.then(|| {
            let read_back = seq.value_at(&sel.indices);
            if read_back != sel.value || sel.indices.len() != k {
                (
                    VerificationStatus::Failed,
                    Some(format!("indices read back {read_back}, value {}", sel.value)),
                )
            } else {
                compare(greedy_baseline(seq, k), sel.value)
            }
        });
        (sel.value, check)
    }));

    print_summary(&measurements, &options);

    if let Err(err) = write(options.format, &measurements) {
        eprintln!("scale_probe output error: {err}");
        std::process::exit(1);
    }
}

type Check = (VerificationStatus, Option<String>);

fn compare(baseline: u64, got: u64) -> Check {
    if baseline == got {
        (VerificationStatus::Passed, None)
    } else {
        (
            VerificationStatus::Failed,
            Some(format!("expected {baseline}, got {got}")),
        )
    }
}

fn run_scenario<F>(
    scenario: &'static str,
    sizes: &[usize],
    options: &Options,
    sys: &mut System,
    compute: F,
) -> Vec<Measurement>
where
    F: Fn(&DigitSequence, bool) -> (u64, Option<Check>),
{
    let total = sizes.len();
    let mut out = Vec::with_capacity(total);
    for (idx, &len) in sizes.iter().enumerate() {
        eprint!("      [{}/{}] len {}... ", idx + 1, total, len);
        let seq = deterministic_digits(len, idx as u64 + 1);
        let verify = len <= options.verify_limit;

        let before = rss_kib(sys);
        let start = Instant::now();
        let (value, check) = compute(&seq, verify);
        let wall_s = start.elapsed().as_secs_f64();
        let after = rss_kib(sys);

        let (status, detail) = check.unwrap_or((VerificationStatus::NotChecked, None));
        eprintln!(
            "{} value={}, time={:.3}s, status={}",
            status.icon(),
            value,
            wall_s,
            status.label()
        );
        out.push(Measurement {
            scenario,
            size: format!("len={len}"),
            value,
            wall_s,
            rss_delta_kib: after.saturating_sub(before),
            verification: Verification { status, detail },
        });
    }
    eprintln!();
    out
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    eprintln!("{}", "=".repeat(80));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(80));

    let count = |s: VerificationStatus| {
        measurements
            .iter()
            .filter(|m| m.verification.status == s)
            .count()
    };
    let (passed, failed, not_checked) = (
        count(VerificationStatus::Passed),
        count(VerificationStatus::Failed),
        count(VerificationStatus::NotChecked),
    );
    eprintln!("  runs: {}", measurements.len());
    eprintln!("  ✓ passed: {passed}");
    eprintln!("  ✗ failed: {failed}");
    eprintln!(
        "  ○ not checked (len > {}): {not_checked}",
        options.verify_limit
    );

    for m in measurements
        .iter()
        .filter(|m| m.verification.status == VerificationStatus::Failed)
    {
        eprintln!(
            "  ✗ {} ({}): {}",
            m.scenario,
            m.size,
            m.verification.detail.as_deref().unwrap_or("")
        );
    }

    let mut by_scenario: BTreeMap<&str, Vec<&Measurement>> = BTreeMap::new();
    for m in measurements {
        by_scenario.entry(m.scenario).or_default().push(m);
    }
    eprintln!();
    for (scenario, ms) in &by_scenario {
        let max_time = ms.iter().map(|m| m.wall_s).fold(0.0, f64::max);
        let max_mem = ms.iter().map(|m| m.rss_delta_kib).max().unwrap_or(0);
        eprintln!("  {scenario}: {} sizes, max time {max_time:.3}s, max rss delta {max_mem} KiB", ms.len());
    }
    eprintln!("{}\n", "=".repeat(80));
}

fn write(format: OutputFormat, measurements: &[Measurement]) -> Result<(), String> {
    match format {
        OutputFormat::Csv => {
            println!("scenario,size,value,wall_s,rss_delta_kib,verification_status,verification_detail");
            for m in measurements {
                let detail = m
                    .verification
                    .detail
                    .as_ref()
                    .map(|s| s.replace('"', "'"))
                    .unwrap_or_default();
                println!(
                    "{},{},{},{:.3},{},{},\"{}\"",
                    m.scenario,
                    m.size,
                    m.value,
                    m.wall_s,
                    m.rss_delta_kib,
                    m.verification.status.label(),
                    detail
                );
            }
            Ok(())
        }
        OutputFormat::Table => {
            let col1 = measurements.iter().map(|m| m.scenario.len()).max().unwrap_or(0).max(8);
            let col2 = measurements.iter().map(|m| m.size.len()).max().unwrap_or(0).max(4);
            println!(
                "{:<col1$}  {:<col2$}  {:>20}  {:>10}  {:>14}  {:>12}",
                "scenario", "size", "value", "wall_s", "rss_delta_kib", "status"
            );
            for m in measurements {
                println!(
                    "{:<col1$}  {:<col2$}  {:>20}  {:>10.3}  {:>14}  {:>12}",
                    m.scenario,
                    m.size,
                    m.value,
                    m.wall_s,
                    m.rss_delta_kib,
                    m.verification.status.label()
                );
            }
            Ok(())
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(measurements).map_err(|e| e.to_string())?;
            println!("{json}");
            Ok(())
        }
    }
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map_or(0, |p| p.memory() / 1024)
}

/// Reproducible digits from a 64-bit LCG; roughly one in ten is a zero.
fn deterministic_digits(len: usize, seed: u64) -> DigitSequence {
    let mut state = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    let digits = (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            ((state >> 33) % 10) as u8
        })
        .collect();
    DigitSequence::from_digits(digits).unwrap_or_default()
}

/// Every `(i, j)` pair.
fn pair_baseline(seq: &DigitSequence) -> u64 {
    let d = seq.as_slice();
    let mut best = 0u64;
    for i in 0..d.len() {
        for j in i + 1..d.len() {
            best = best.max(u64::from(d[i]) * 10 + u64::from(d[j]));
        }
    }
    best
}

/// Take the leftmost largest digit that still leaves room for the rest.
fn greedy_baseline(seq: &DigitSequence, k: usize) -> u64 {
    let d = seq.as_slice();
    let mut start = 0;
    let mut value = 0u64;
    for remaining in (1..=k).rev() {
        let window = &d[start..=d.len() - remaining];
        let (offset, &digit) = window
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|&(_, &digit)| digit)
            .unwrap_or((0, &0));
        value = value * 10 + u64::from(digit);
        start += offset + 1;
    }
    value
}
