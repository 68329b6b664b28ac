// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawer panel geometry for each side and size.
//!
//! An invalid custom size logs a warning (visible with `RUST_LOG=warn`) and
//! falls back to the preset.
//!
//! Run:
//! - `RUST_LOG=warn cargo run -p perch_demos --example drawer_sizes`

use kurbo::{Rect, Vec2};
use perch_overlay::drawer::{CustomSize, DrawerExtent};
use perch_overlay::{DismissReason, Drawer, DrawerEvent, DrawerOptions, DrawerSize, Side};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let viewport = Rect::new(0.0, 0.0, 1280.0, 800.0);
    let sizes = [
        DrawerSize::Sm,
        DrawerSize::Md,
        DrawerSize::Lg,
        DrawerSize::Xl,
        DrawerSize::Full,
    ];
    for side in [Side::Left, Side::Right, Side::Top, Side::Bottom] {
        for size in sizes {
            let drawer = Drawer::new(DrawerOptions {
                side,
                size,
                ..DrawerOptions::default()
            });
            println!(
                "{side:?} {size:?}: panel={:?} hidden_offset={:?}",
                drawer.panel_rect(viewport),
                drawer.hidden_offset(viewport)
            );
        }
    }

    let custom = Drawer::new(DrawerOptions {
        custom_size: Some("90%".into()),
        ..DrawerOptions::default()
    });
    assert_eq!(
        custom.extent(),
        DrawerExtent::Custom(CustomSize::Percent(90.0))
    );
    assert_eq!(
        custom.panel_rect(viewport),
        Rect::new(128.0, 0.0, 1280.0, 800.0)
    );

    let fallback = Drawer::new(DrawerOptions {
        side: Side::Left,
        custom_size: Some("wide".into()),
        ..DrawerOptions::default()
    });
    assert_eq!(fallback.extent(), DrawerExtent::Preset(DrawerSize::Md));
    assert_eq!(fallback.hidden_offset(viewport), Vec2::new(-448.0, 0.0));

    // Controlled: Escape asks, the host decides.
    let mut drawer = Drawer::default();
    drawer.set_open(true);
    let request = drawer.dismiss(DismissReason::Escape);
    println!("== Escape ==\n  {:?}", request);
    assert_eq!(
        request,
        Some(DrawerEvent::CloseRequested(DismissReason::Escape))
    );
    assert!(drawer.is_open());
    let events = drawer.set_open(false);
    println!("== Host closes ==\n  {:?}", events);
    assert!(drawer.is_mounted());
}
