// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for pushing values from a property into its views.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_property_sheet::{CounterEditor, CounterProperty, TextProperty};

fn bench_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("binding/set_value");

    for views in [1_usize, 4, 16, 64] {
        group.throughput(Throughput::Elements(views as u64 * 2));

        group.bench_with_input(BenchmarkId::new("counter", views), &views, |b, &views| {
            let count = CounterProperty::new("Count", 0, 0, 1_000).unwrap();
            let editors: Vec<_> = (0..views).map(|_| count.create_editor()).collect();
            let viewers: Vec<_> = (0..views).map(|_| count.create_viewer()).collect();
            let mut next = 0;
            b.iter(|| {
                next = (next + 1) % 1_000;
                count.set_value(black_box(next));
            });
            black_box((editors, viewers));
        });

        group.bench_with_input(BenchmarkId::new("text", views), &views, |b, &views| {
            let title = TextProperty::new("Title", "");
            let editors: Vec<_> = (0..views).map(|_| title.create_editor()).collect();
            let viewers: Vec<_> = (0..views).map(|_| title.create_viewer()).collect();
            let values = ["alpha".to_string(), "beta".to_string()];
            let mut flip = false;
            b.iter(|| {
                flip = !flip;
                title.set_value(black_box(values[usize::from(flip)].clone()));
            });
            black_box((editors, viewers));
        });
    }

    group.finish();

    let mut group = c.benchmark_group("binding/redundant");

    // Every widget compares before writing; this is the cost of a no-op push.
    group.bench_function("broadcast_unchanged/16", |b| {
        let count = CounterProperty::new("Count", 0, 5, 10).unwrap();
        let editors: Vec<_> = (0..16).map(|_| count.create_editor()).collect();
        b.iter(|| count.broadcast_to_editors());
        black_box(editors);
    });

    group.finish();
}

fn bench_edit_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("binding/edit");

    group.bench_function("counter_step", |b| {
        let count = CounterProperty::new("Count", 0, 0, i32::MAX).unwrap();
        let editor = count.create_editor();
        let _viewer = count.create_viewer();
        b.iter(|| black_box(editor.edit(CounterEditor::step_up)));
    });

    group.bench_function("observed", |b| {
        let count = CounterProperty::new("Count", 0, 0, i32::MAX).unwrap();
        let editor = count.create_editor();
        for _ in 0..4 {
            count.subscribe(|event| {
                black_box(event.revision);
            });
        }
        b.iter(|| black_box(editor.edit(CounterEditor::step_up)));
    });

    group.finish();
}

criterion_group!(benches, bench_fan_out, bench_edit_round_trip);
criterion_main!(benches);
