//! Capture cost against capture plus first render

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use cryypt_errors::{new, new_with_path};
use std::hint::black_box;

#[inline(never)]
fn nested(depth: usize, render: bool) -> usize {
    if depth == 0 {
        let err = new_with_path("bench");
        if render {
            return format!("{err:#}").len();
        }
        return err.path().map_or(0, |path| path.len());
    }
    black_box(nested(depth - 1, render))
}

/// Capture only copies addresses; rendering resolves symbols
fn benchmark_capture(c: &mut Criterion) {
    let mut group = c.benchmark_group("call_path");

    group.bench_function("new_without_path", |b| {
        b.iter(|| black_box(new(black_box("bench"))));
    });

    for depth in [0usize, 8, 32] {
        group.bench_with_input(BenchmarkId::new("capture", depth), &depth, |b, &depth| {
            b.iter(|| black_box(nested(depth, false)));
        });
        group.bench_with_input(
            BenchmarkId::new("capture_and_render", depth),
            &depth,
            |b, &depth| {
                b.iter(|| black_box(nested(depth, true)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_capture);
criterion_main!(benches);
