// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tether_core::{Promise, Scalar};
use tether_stream::prelude::*;

fn bench_filter_map_distinct(c: &mut Criterion) {
    let scalar = Scalar::new(0u64);
    let total = Arc::new(AtomicU64::new(0));
    let sink = Arc::clone(&total);
    let _sub = scalar
        .clone()
        .filter(|n: &u64| n % 3 != 0)
        .map(|n: u64| n / 2)
        .distinct()
        .observe(move |n: u64| {
            sink.fetch_add(n, Ordering::Relaxed);
        });

    let mut next = 0u64;
    c.bench_function("filter_map_distinct", |b| {
        b.iter(|| {
            next += 1;
            scalar.set(black_box(next)).unwrap();
        });
    });
}

fn bench_switch_to_latest_promises(c: &mut Criterion) {
    let scalar = Scalar::new(0u64);
    let total = Arc::new(AtomicU64::new(0));
    let sink = Arc::clone(&total);
    let _sub = scalar
        .clone()
        .flat_map_latest(|n: u64| Promise::<u64, ()>::value(n))
        .on_success(move |n: u64| {
            sink.fetch_add(n, Ordering::Relaxed);
        });

    let mut next = 0u64;
    c.bench_function("switch_to_latest_resolved_promises", |b| {
        b.iter(|| {
            next += 1;
            scalar.set(black_box(next)).unwrap();
        });
    });
}

criterion_group!(benches, bench_filter_map_distinct, bench_switch_to_latest_promises);
criterion_main!(benches);
