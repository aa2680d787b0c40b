//! Benchmarks for catalog generation and canonical-index mapping.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use canonica::prelude::*;

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_generate");

    for length in [4usize, 6, 8] {
        group.bench_with_input(BenchmarkId::new("radix2", length), &length, |b, &length| {
            b.iter(|| {
                let mut catalog = WordCatalog::new(2).unwrap();
                black_box(catalog.generate(length).unwrap())
            })
        });
    }

    group.finish();
}

fn bench_reverse_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_lookup");

    let mut catalog = WordCatalog::new(2).unwrap();
    catalog.generate(10).unwrap();
    let hashes: Vec<u64> = catalog.words().iter().map(HashedWord::hash).collect();

    group.bench_function("hash_to_index", |b| {
        b.iter(|| {
            for &hash in &hashes {
                black_box(catalog.index_of_hash(hash).unwrap());
            }
        })
    });

    group.finish();
}

fn bench_canonical_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_canonical_map");

    let mut book = RuleBook::new(2, &[(&[0, 1], &[0]), (&[1, 0], &[1])]).unwrap();
    book.complete(&CompletionConfig::default());

    for length in [4usize, 6, 8] {
        let mut catalog = WordCatalog::new(2).unwrap();
        catalog.generate(length).unwrap();
        group.bench_with_input(
            BenchmarkId::new("idempotent_pair", length),
            &length,
            |b, _| b.iter(|| black_box(catalog.canonical_map(&book).unwrap())),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_generation, bench_reverse_lookup, bench_canonical_map);
criterion_main!(benches);
