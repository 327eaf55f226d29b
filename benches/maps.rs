#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::collections::HashMap;

use criterion::{Criterion, criterion_group, criterion_main};
use probemap::{ChainedHashMap, OpenHashMap};
use proptest::{
    prelude::{Strategy, any},
    strategy::ValueTree,
    test_runner::TestRunner,
};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;

fn hash_map_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = any::<[(String, u64); ITEMS_AMOUNT]>()
        .new_tree(&mut runner)
        .unwrap()
        .current();

    let mut group = c.benchmark_group("Hash map comparison benchmark");
    group.sample_size(SAMPLE_SIZE);
    let mut open_map = OpenHashMap::with_capacity(ITEMS_AMOUNT);
    let mut chained_map = ChainedHashMap::with_capacity(ITEMS_AMOUNT);
    let mut rust_map = HashMap::new();
    group.bench_function("open addressing put", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                open_map.put(key, value);
            }
        });
    });
    group.bench_function("separate chaining put", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                chained_map.put(key, value);
            }
        });
    });
    group.bench_function("rust std insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                rust_map.insert(key, value);
            }
        });
    });
    group.bench_function("open addressing get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = open_map.get(key);
            }
        });
    });
    group.bench_function("separate chaining get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = chained_map.get(key);
            }
        });
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = rust_map.get(key);
            }
        });
    });
    group.finish();
}

criterion_group!(benches, hash_map_benches);

criterion_main!(benches);
