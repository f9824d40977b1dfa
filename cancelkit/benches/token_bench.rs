//! Benchmarks for token storage and removal.

use cancelkit::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::collections::HashSet;

fn token_benchmark(c: &mut Criterion) {
    c.bench_function("store_in_sequence_1k", |b| {
        b.iter(|| {
            let mut bag = Vec::with_capacity(1_000);
            for _ in 0..1_000 {
                CancelToken::from_fn(|| {}).store_in(&mut bag);
            }
            black_box(bag)
        })
    });

    c.bench_function("set_remove_one_of_1k", |b| {
        b.iter_batched(
            || {
                let mut set = HashSet::with_capacity(1_000);
                let victim = CancelToken::from_fn(|| {});
                let victim_id = victim.id();
                victim.store_in_set(&mut set);
                for _ in 0..999 {
                    CancelToken::from_fn(|| {}).store_in_set(&mut set);
                }
                (set, victim_id)
            },
            |(mut set, victim_id)| {
                black_box(set.take(&victim_id));
                set
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, token_benchmark);
criterion_main!(benches);
