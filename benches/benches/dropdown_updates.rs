// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use perch_overlay::{Dropdown, DropdownMenu, DropdownOptions, ItemConfig, Key, PortalLayer};

fn ready_dropdown(items: usize) -> Dropdown {
    let mut dropdown = Dropdown::with_items(
        DropdownOptions::default(),
        (0..items).map(|i| ItemConfig {
            disabled: i % 5 == 4,
            ..ItemConfig::default()
        }),
    );
    dropdown.set_anchor(Some(Rect::from_origin_size((100.0, 50.0), (80.0, 30.0))));
    dropdown.set_floating_size(Some(Size::new(192.0, 240.0)));
    dropdown
}

fn bench_open_close(c: &mut Criterion) {
    let mut group = c.benchmark_group("dropdown");
    group.bench_function("open_sync_close_unmount", |b| {
        b.iter_batched(
            || (ready_dropdown(8), DropdownMenu::new(), PortalLayer::new()),
            |(mut dropdown, mut menu, mut portal)| {
                let update = dropdown.open();
                black_box(menu.sync(&update.snapshot, &mut portal));
                let update = dropdown.close();
                black_box(menu.sync(&update.snapshot, &mut portal));
                if let Some(timer) = update.grace_timer() {
                    let update = dropdown.grace_elapsed(timer);
                    black_box(menu.sync(&update.snapshot, &mut portal));
                }
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_keyboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyboard");
    for &n in &[8usize, 64, 512] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("arrow_down_through_n{}", n), |b| {
            b.iter_batched(
                || {
                    let mut dropdown = ready_dropdown(n);
                    dropdown.open();
                    dropdown
                },
                |mut dropdown| {
                    for _ in 0..n {
                        black_box(dropdown.key(Key::ArrowDown).snapshot.active_item);
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_open_close, bench_keyboard);
criterion_main!(benches);
