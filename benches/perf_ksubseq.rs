use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use subseq_max::strategies::memoized::KSubsequenceMaximizer;
use subseq_max::strategies::table::KSubsequenceTable;
use subseq_max::{select_k, DigitSequence, LayeredEngine};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn random_digits(rng: &mut StdRng, len: usize) -> DigitSequence {
    let digits = (0..len).map(|_| rng.gen_range(0..10u8)).collect();
    DigitSequence::from_digits(digits).expect("generated digits are in range")
}

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    match sys.process(get_current_pid().unwrap()) {
        Some(p) => p.memory() / 1024,
        None => 0,
    }
}

fn bench_memoized(c: &mut Criterion) {
    let mut group = c.benchmark_group("ksubseq_memoized");
    for &len in &[100usize, 400, 1_000] {
        group.bench_with_input(BenchmarkId::new("k12", len), &len, |b, &len| {
            b.iter_batched(
                || random_digits(&mut StdRng::seed_from_u64(42), len),
                |seq| {
                    let mut query = KSubsequenceMaximizer::new(&seq, 12);
                    criterion::black_box(query.solve());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("ksubseq_table");
    for &len in &[1_000usize, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("solve_k12", len), &len, |b, &len| {
            b.iter_batched(
                || random_digits(&mut StdRng::seed_from_u64(42), len),
                |seq| {
                    let engine = LayeredEngine::new(KSubsequenceTable::new(&seq, 12));
                    criterion::black_box(engine.solve());
                },
                BatchSize::LargeInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("select_k12", len), &len, |b, &len| {
            b.iter_batched(
                || random_digits(&mut StdRng::seed_from_u64(42), len),
                |seq| {
                    let before = rss_kib();
                    let sel = select_k(&seq, 12);
                    let after = rss_kib();
                    criterion::black_box(sel);
                    eprintln!(
                        "RSS KiB delta (select_k {len}): {}",
                        after.saturating_sub(before)
                    );
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_memoized, bench_table);
criterion_main!(benches);
