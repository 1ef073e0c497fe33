// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_property_sheet::ValueSet;

fn bench_replace(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_set/replace");

    // Linear de-duplication is quadratic; the hashed variant should win for
    // long candidate lists.
    for len in [16_usize, 128, 1_024, 4_096] {
        let keys: Vec<u32> = (0..len as u32).chain(0..(len as u32 / 4)).collect();
        group.throughput(Throughput::Elements(keys.len() as u64));

        group.bench_with_input(BenchmarkId::new("linear", len), &keys, |b, keys| {
            b.iter_batched(
                ValueSet::<u32>::new,
                |mut set| {
                    black_box(set.replace(keys.iter().copied()));
                    black_box(set);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("hashed", len), &keys, |b, keys| {
            b.iter_batched(
                ValueSet::<u32>::new,
                |mut set| {
                    black_box(set.replace_hashed(keys.iter().copied()));
                    black_box(set);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_replace);
criterion_main!(benches);
