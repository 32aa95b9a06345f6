use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use subseq_max::input::{bank_values, parse_banks, Bank};
use subseq_max::Strategy;

/// Sum the largest ordered K-digit selection of every line in a puzzle file.
#[derive(Parser, Debug)]
#[command(name = "bank_total", version, about)]
struct Cli {
    /// Input file: one digit sequence per line.
    input: PathBuf,

    /// Digits to select per line. Without it, prints the K=2 and K=12 totals.
    #[arg(short = 'k', long = "count")]
    count: Option<usize>,

    /// Maximizer to use with --count (pair, memoized, table).
    #[arg(long, default_value = "memoized", value_parser = parse_strategy)]
    strategy: Strategy,

    /// Print the value chosen for every line.
    #[arg(short, long)]
    verbose: bool,
}

fn parse_strategy(value: &str) -> Result<Strategy, String> {
    value.parse()
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("bank_total: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let banks = parse_banks(&text).with_context(|| format!("parsing {}", cli.input.display()))?;
    eprintln!("loaded {} banks from {}", banks.len(), cli.input.display());

    match cli.count {
        Some(k) => report("total", &banks, k, cli.strategy, cli.verbose),
        None => {
            report("pt1", &banks, 2, Strategy::Pair, cli.verbose)?;
            report("pt2", &banks, 12, Strategy::Memoized, cli.verbose)
        }
    }
}

fn report(label: &str, banks: &[Bank], k: usize, strategy: Strategy, verbose: bool) -> Result<()> {
    let start = Instant::now();
    let values = bank_values(banks, k, strategy)?;
    let elapsed = start.elapsed();

    if verbose {
        for (bank, value) in banks.iter().zip(&values) {
            eprintln!("  line {:>4}  {}  ->  {value}", bank.line, bank.digits);
        }
    }

    let total = values
        .iter()
        .try_fold(0u64, |acc, &v| acc.checked_add(v))
        .with_context(|| format!("{label}: total of {} banks overflows u64", banks.len()))?;

    println!("{label}: total output (k={k}, {strategy}) = {total}");
    eprintln!("{label}: calc time = {:.6}s", elapsed.as_secs_f64());
    Ok(())
}
