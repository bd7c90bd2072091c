// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the per-event gesture paths.
//!
//! Measures the performance of:
//! - Drag-to-feedback mapping
//! - Release evaluation
//! - A full swipe through the viewer component
//! - Gallery filtering over a generated catalog

use criterion::{criterion_group, criterion_main, Criterion};
use iced_core::Point;
use lightbox_dismiss::domain::dismiss::{DismissPolicy, DragVector, FallbackDelay, VisualMapper};
use lightbox_dismiss::domain::media::{filter, MediaId, MediaItem, SearchQuery};
use lightbox_dismiss::infrastructure::TracingHost;
use lightbox_dismiss::ui::viewer::{Message, Viewer};
use std::hint::black_box;
use std::sync::Arc;

fn bench_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("dismiss_mapping");
    let mapper = VisualMapper::default();
    let policy = DismissPolicy::default();

    group.bench_function("map_feedback", |b| {
        b.iter(|| mapper.map(black_box(DragVector::new(73.0, 131.0))));
    });

    group.bench_function("evaluate_release", |b| {
        b.iter(|| policy.evaluate(black_box(DragVector::new(90.0, 95.0))));
    });

    group.finish();
}

/// A full swipe: start, twenty moves and a cancelled release.
fn bench_swipe(c: &mut Criterion) {
    let mut group = c.benchmark_group("dismiss_mapping");

    let mut viewer = Viewer::new(Arc::new(TracingHost::new()), FallbackDelay::default());
    viewer.handle(Message::Open(Arc::new(MediaItem::new(
        MediaId::new("bench"),
        "Bench",
        "bench.mp4",
        "bench.jpg",
    ))));
    viewer.handle(Message::PlaybackStarted);

    group.bench_function("swipe_cancelled", |b| {
        b.iter(|| {
            viewer.handle(Message::TouchStart(Point::new(0.0, 0.0)));
            for step in 1..=20 {
                let offset = step as f32 * 3.0;
                black_box(viewer.handle(Message::TouchMove(Point::new(offset, offset))));
            }
            black_box(viewer.handle(Message::TouchEnd));
        });
    });

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_filter");

    let items: Vec<MediaItem> = (0..500)
        .map(|i| {
            MediaItem::new(
                MediaId::new(format!("clip-{i}")),
                format!("Match {i} highlights"),
                format!("clip-{i}.mp4"),
                format!("clip-{i}.jpg"),
            )
            .with_opponent(if i % 7 == 0 { "Saint-Étienne" } else { "Riverside" })
            .with_contributors(vec![format!("Contributor {}", i % 13)])
        })
        .collect();
    let query = SearchQuery::new("etienne");

    group.bench_function("filter_500", |b| {
        b.iter(|| black_box(filter(&items, &query)).len());
    });

    group.finish();
}

criterion_group!(benches, bench_mapping, bench_swipe, bench_filter);
criterion_main!(benches);
