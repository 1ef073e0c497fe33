// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the time carry reducer and the time editor.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use understory_property_sheet::carry::{RawTime, apply_delta, settle};
use understory_property_sheet::{Step, Time, TimeField, TimeProperty};

fn bench_reducer(c: &mut Criterion) {
    let mut group = c.benchmark_group("carry/reducer");

    group.bench_function("settle/no_carry", |b| {
        b.iter(|| settle(black_box(RawTime::new(3, 30, 30)), TimeField::Seconds, u32::MAX));
    });

    group.bench_function("settle/carry_to_hours", |b| {
        b.iter(|| settle(black_box(RawTime::new(3, 59, 60)), TimeField::Seconds, u32::MAX));
    });

    group.bench_function("apply_delta/3661_seconds", |b| {
        b.iter(|| {
            let mut time = Time::ZERO;
            for _ in 0..3_661 {
                time = apply_delta(time, TimeField::Seconds, Step::Up, u32::MAX);
            }
            black_box(time)
        });
    });

    group.finish();
}

fn bench_editor(c: &mut Criterion) {
    let mut group = c.benchmark_group("carry/editor");

    group.bench_function("step_seconds", |b| {
        let timer = TimeProperty::new("Timer", Time::ZERO);
        let editor = timer.create_editor();
        let _viewer = timer.create_viewer();
        b.iter(|| black_box(editor.edit(|panel| panel.step(TimeField::Seconds, Step::Up))));
    });

    group.finish();
}

criterion_group!(benches, bench_reducer, bench_editor);
criterion_main!(benches);
