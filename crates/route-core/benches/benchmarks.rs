use criterion::{criterion_group, criterion_main, Criterion};
use route_core::text::levenshtein;
use route_core::{suggest, Gazetteer};
use std::hint::black_box;

fn bench_levenshtein(c: &mut Criterion) {
    c.bench_function("levenshtein/short", |b| {
        b.iter(|| levenshtein(black_box("Lodnon"), black_box("London")))
    });
    c.bench_function("levenshtein/long", |b| {
        b.iter(|| levenshtein(black_box("Llanfairpwllgwyngyll"), black_box("Rio de Janeiro")))
    });
}

fn bench_suggest(c: &mut Criterion) {
    let gaz = Gazetteer::load().expect("bundled gazetteer");
    c.bench_function("suggest/bundled", |b| {
        b.iter(|| suggest(black_box("Mexco Citty"), gaz))
    });
}

criterion_group!(benches, bench_levenshtein, bench_suggest);
criterion_main!(benches);
