// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the gallery hot paths.
//!
//! Measures the performance of:
//! - Size classification across a sweep of widths
//! - Grid rendering for each size class
//! - Presentation navigation around the full ring

use criterion::{criterion_group, criterion_main, Criterion};
use iced_gallery::application::gallery::{GridRenderer, PresentationController, ViewportWatcher};
use iced_gallery::domain::gallery::{classify, ImageIndex, ImageSet, SizeClass};
use std::hint::black_box;

fn sample_images() -> ImageSet {
    ImageSet::from_urls((0..8).map(|i| format!("https://example.com/{i}.jpg")))
        .expect("eight urls")
}

/// Benchmark classification and hysteresis over a drag-resize sweep.
fn bench_viewport(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport");

    group.bench_function("classify_sweep", |b| {
        b.iter(|| {
            for width in (300..1200).step_by(7) {
                black_box(classify(black_box(width as f32)));
            }
        });
    });

    group.bench_function("watcher_resize_sweep", |b| {
        b.iter(|| {
            let mut watcher = ViewportWatcher::new(300.0);
            watcher.subscribe(|class| {
                black_box(class);
            });
            for width in (300..1200).step_by(7) {
                black_box(watcher.resize(width as f32));
            }
        });
    });

    group.finish();
}

/// Benchmark rendering the grid for every size class.
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_render");
    let images = sample_images();

    for class in [SizeClass::Small, SizeClass::Medium, SizeClass::Large] {
        group.bench_function(class.to_string(), |b| {
            b.iter(|| black_box(GridRenderer::render_set(&images, black_box(class))));
        });
    }

    group.finish();
}

/// Benchmark stepping through all images and back.
fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("presentation");

    group.bench_function("next_full_ring", |b| {
        let mut controller = PresentationController::new(sample_images());
        controller.open_index(ImageIndex::FIRST);
        b.iter(|| {
            for _ in 0..8 {
                black_box(controller.next());
            }
        });
    });

    group.bench_function("previous_full_ring", |b| {
        let mut controller = PresentationController::new(sample_images());
        controller.open_index(ImageIndex::LAST);
        b.iter(|| {
            for _ in 0..8 {
                black_box(controller.previous());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_viewport, bench_render, bench_navigation);
criterion_main!(benches);
