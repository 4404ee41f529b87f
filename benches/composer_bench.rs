use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use typepass::api::build_cost_table;
use typepass::composer::{Composer, Constraints};
use typepass::cost::BigramCostTable;
use typepass::layouts::Topology;
use typepass::vocabulary::{LoadOptions, Vocabulary};

/// Deterministic pseudo-words of 2..=7 letters.
fn setup_vocabulary(table: &BigramCostTable, count: usize) -> Vocabulary {
    let mut rng = fastrand::Rng::with_seed(1234);
    let words: Vec<String> = (0..count)
        .map(|_| {
            let len = rng.usize(2..=7);
            (0..len).map(|_| rng.lowercase()).collect()
        })
        .collect();
    let opts = LoadOptions {
        dedup: true,
        ..Default::default()
    };
    Vocabulary::from_words(&words, table, &opts).expect("Failed to build vocabulary")
}

fn criterion_benchmark(c: &mut Criterion) {
    let table = build_cost_table(Topology::Grid, 20).expect("Failed to build table");
    let vocab = setup_vocabulary(&table, 2_000);
    let constraints = Constraints::new(20, 24, 4).expect("Bad constraints");
    let composer = Composer::new(&table, constraints);

    c.bench_function("build_cost_table (grid)", |b| {
        b.iter(|| build_cost_table(black_box(Topology::Grid), black_box(20)))
    });

    let mut group = c.benchmark_group("compose");
    group.sample_size(10);
    group.bench_function("compose (2k words, 20..=24, 4 words)", |b| {
        b.iter(|| composer.compose(black_box(&vocab)))
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
