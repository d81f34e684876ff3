// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use wallcraft_carousel::{CarouselLayout, CarouselState};

fn build_state(len: usize) -> CarouselState {
    let mut state = CarouselState::new();
    for i in 0..len {
        state.add_panel(format!("Panel {i}"));
    }
    state
}

fn bench_display_items(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/display_items");
    let layout = CarouselLayout::default();

    // Every scroll event re-derives the full tripled sequence.
    for len in [11usize, 128, 1_024] {
        let mut state = build_state(len);
        state.set_scroll_offset(-1_234.5);
        group.throughput(Throughput::Elements((len * 3) as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &state, |b, state| {
            b.iter(|| black_box(state.display_items(&layout, 1_280.0)));
        });
    }

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/visible_panels");

    for len in [128usize, 1_024, 8_192] {
        let mut state = build_state(len);
        state.set_filter("Panel 1");
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &state, |b, state| {
            b.iter(|| black_box(state.visible_panels().len()));
        });
    }

    group.finish();
}

fn bench_remove_selected(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/remove_panel");

    for len in [128usize, 1_024] {
        let state = build_state(len);
        let middle = state.panels()[len / 2].id;
        group.bench_with_input(BenchmarkId::from_parameter(len), &state, |b, state| {
            b.iter_batched(
                || {
                    let mut state = state.clone();
                    state.select(middle);
                    state
                },
                |mut state| {
                    state.remove_panel(middle);
                    black_box(state);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_display_items,
    bench_filter,
    bench_remove_selected
);
criterion_main!(benches);
