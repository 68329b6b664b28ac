// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size, Vec2};
use perch_position::{
    GeometrySample, Overflow, PlacementOptions, PositionEngine, Side, compute_placement,
    compute_placement_with,
};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_anchors(count: usize, viewport: Rect, seed: u64) -> Vec<Rect> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| {
            let x = viewport.x0 + rng.next_f64() * viewport.width();
            let y = viewport.y0 + rng.next_f64() * viewport.height();
            Rect::from_origin_size((x, y), (40.0 + rng.next_f64() * 120.0, 24.0))
        })
        .collect()
}

fn bench_compute(c: &mut Criterion) {
    let viewport = Rect::new(0.0, 0.0, 1280.0, 800.0);
    let panel = Size::new(192.0, 120.0);
    let anchors = gen_anchors(1024, viewport, 0x5eed);

    let mut group = c.benchmark_group("compute");
    group.throughput(Throughput::Elements(anchors.len() as u64));
    group.bench_function("keep_bottom", |b| {
        b.iter(|| {
            for anchor in &anchors {
                black_box(compute_placement(*anchor, panel, Side::Bottom));
            }
        });
    });
    let flip = PlacementOptions {
        overflow: Overflow::Flip,
        ..PlacementOptions::default()
    };
    let bounds = Some(viewport);
    group.bench_function("flip_bottom", |b| {
        b.iter(|| {
            for anchor in &anchors {
                black_box(compute_placement_with(*anchor, panel, &flip, bounds));
            }
        });
    });
    group.finish();
}

fn bench_scroll_burst(c: &mut Criterion) {
    let anchor = Rect::from_origin_size((100.0, 300.0), (80.0, 30.0));
    let mut group = c.benchmark_group("scroll_burst");
    for &samples in &[1usize, 16, 256] {
        group.throughput(Throughput::Elements(samples as u64));
        group.bench_function(format!("samples_per_frame_{}", samples), |b| {
            b.iter_batched(
                || {
                    let mut engine = PositionEngine::default();
                    engine.set_reference(Some(anchor));
                    engine.set_floating_size(Some(Size::new(192.0, 120.0)));
                    engine.set_open(true);
                    engine
                },
                |mut engine| {
                    let mut request = None;
                    for i in 0..samples {
                        let sample = GeometrySample {
                            reference: Some(anchor - Vec2::new(0.0, i as f64)),
                            viewport: None,
                        };
                        request = engine.geometry_changed(sample).or(request);
                    }
                    if let Some(request) = request {
                        black_box(engine.on_frame(request));
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compute, bench_scroll_burst);
criterion_main!(benches);
