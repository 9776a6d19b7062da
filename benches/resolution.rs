//! Benchmarks for the name-resolution paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use parapet::prelude::*;

fn explicit_name_failure(c: &mut Criterion) {
    c.bench_function("explicit_name_failure", |b| {
        b.iter(|| {
            let outcome = arg(black_box(Option::<String>::None))
                .named("token")
                .not_null();
            let _ = black_box(outcome);
        })
    });
}

fn frame_inspection_failure(c: &mut Criterion) {
    fn probe(token: Option<u64>) -> GuardResult<u64> {
        not_null(token)
    }
    c.bench_function("frame_inspection_failure", |b| {
        b.iter(|| {
            let _ = black_box(probe(black_box(None)));
        })
    });
}

fn capture_failure(c: &mut Criterion) {
    c.bench_function("capture_failure", |b| {
        b.iter(|| {
            let pending: Option<u64> = black_box(None);
            let _ = black_box(not_null_expr(capture!(pending)));
        })
    });
}

fn success_path(c: &mut Criterion) {
    c.bench_function("success_path", |b| {
        b.iter(|| {
            let _ = black_box(not_null(black_box(Some(42u64))));
        })
    });
}

criterion_group!(
    benches,
    explicit_name_failure,
    frame_inspection_failure,
    capture_failure,
    success_path
);
criterion_main!(benches);
