// rust/engine/benches/generator_bench.rs
#![forbid(unsafe_code)]

/**
 * Generator micro-benchmarks.
 *
 * Focus:
 * - Full generation on the canonical preset with the default word list
 * - Reduced preset (straight directions, shuffled order)
 * - Worst case: every word oversized or the grid crowded, so budgets run out
 */
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordsearch_engine::{DEVOTIONAL_WORDS, GridConfig, generate_with_rng};

fn bench_classic(c: &mut Criterion) {
    let cfg = GridConfig::classic(15, 15).expect("valid bench config");
    c.bench_function("generator.classic.15x15.devotional", |b| {
        b.iter_batched(
            || StdRng::seed_from_u64(20260228),
            |mut rng| black_box(generate_with_rng(DEVOTIONAL_WORDS, &cfg, &mut rng)),
            BatchSize::SmallInput,
        );
    });
}

fn bench_simple(c: &mut Criterion) {
    let cfg = GridConfig::simple(10, 10).expect("valid bench config");
    let words = &DEVOTIONAL_WORDS[..12];
    c.bench_function("generator.simple.10x10.twelve_words", |b| {
        b.iter_batched(
            || StdRng::seed_from_u64(777),
            |mut rng| black_box(generate_with_rng(words, &cfg, &mut rng)),
            BatchSize::SmallInput,
        );
    });
}

fn bench_crowded(c: &mut Criterion) {
    // Far more letters than cells: most words burn their whole retry budget.
    let cfg = GridConfig::classic(6, 6).expect("valid bench config");
    c.bench_function("generator.classic.6x6.crowded", |b| {
        b.iter_batched(
            || StdRng::seed_from_u64(1234),
            |mut rng| black_box(generate_with_rng(DEVOTIONAL_WORDS, &cfg, &mut rng)),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(generator_benches, bench_classic, bench_simple, bench_crowded);
criterion_main!(generator_benches);
