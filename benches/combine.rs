//! Benchmarks for the level-by-level combination step.
//!
//! Run with:
//! ```bash
//! cargo bench --bench combine
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use logic_synth::pool::ExpressionPool;
use logic_synth::truth_table::Domain;

fn seeded(inputs: u32, levels: u32) -> ExpressionPool {
    let mut pool = ExpressionPool::with_variables(Domain::new(inputs).unwrap());
    for level in 1..=levels {
        pool.combine(level).unwrap();
    }
    pool
}

// ============================================================================
// Benchmark: Full search up to a level
// ============================================================================

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("combine/search");
    group.sample_size(10);

    for (inputs, max_level) in [(2, 3), (3, 3), (3, 4)] {
        let size = seeded(inputs, max_level).len();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new(format!("{}-inputs", inputs), max_level),
            &(inputs, max_level),
            |b, &(inputs, max_level)| {
                b.iter(|| seeded(inputs, max_level));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Benchmark: Single level on top of a prepared pool
// ============================================================================

fn bench_single_level(c: &mut Criterion) {
    let mut group = c.benchmark_group("combine/level");
    group.sample_size(10);

    for level in [2, 3, 4] {
        group.bench_with_input(BenchmarkId::new("3-inputs", level), &level, |b, &level| {
            b.iter_with_setup(
                || seeded(3, level - 1),
                |mut pool| {
                    pool.combine(level).unwrap();
                    pool
                },
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_search, bench_single_level);

criterion_main!(benches);
