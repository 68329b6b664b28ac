// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrolling with an open menu.
//!
//! A burst of scroll samples inside one frame produces a single frame request
//! and a single recomputation using the latest sample. The menu keeps
//! following the anchor during its exit transition; samples that arrive after
//! it unmounted are applied when it reopens.
//!
//! Run:
//! - `cargo run -p perch_demos --example scroll_tracking`

use kurbo::{Point, Rect, Size, Vec2};
use perch_overlay::{Dropdown, DropdownOptions, GeometrySample};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let anchor = Rect::from_origin_size((100.0, 300.0), (80.0, 30.0));
    let mut dropdown = Dropdown::new(DropdownOptions::default());
    dropdown.set_anchor(Some(anchor));
    dropdown.set_floating_size(Some(Size::new(192.0, 120.0)));
    dropdown.open();
    let before = dropdown.position().computations();

    let mut requests = Vec::new();
    for step in 1..=10 {
        let sample = GeometrySample {
            reference: Some(anchor - Vec2::new(0.0, f64::from(step) * 4.0)),
            viewport: None,
        };
        requests.extend(dropdown.geometry_changed(sample).frame_request());
    }
    println!("== Scroll burst ==\n  requests: {:?}", requests);
    assert_eq!(requests.len(), 1);

    let update = dropdown.on_frame(requests[0]);
    let placement = update.snapshot.placement.unwrap();
    println!("== Frame ==\n  {:?}", placement);
    assert_eq!(placement.coordinates, Point::new(100.0, 290.0));
    assert_eq!(dropdown.position().computations(), before + 1);

    // While the menu slides out it still follows the anchor.
    let closed = dropdown.close();
    let sample = GeometrySample {
        reference: Some(anchor - Vec2::new(0.0, 100.0)),
        viewport: None,
    };
    let request = dropdown.geometry_changed(sample).frame_request().unwrap();
    let update = dropdown.on_frame(request);
    println!("== Closing ==\n  {:?}", update.snapshot.placement);
    assert_eq!(
        update.snapshot.placement.map(|p| p.coordinates),
        Some(Point::new(100.0, 230.0))
    );
    let computed = dropdown.position().computations();

    // Unmounted: the sample waits, nothing is computed.
    dropdown.grace_elapsed(closed.grace_timer().unwrap());
    let sample = GeometrySample {
        reference: Some(anchor),
        viewport: None,
    };
    let request = dropdown.geometry_changed(sample).frame_request().unwrap();
    dropdown.on_frame(request);
    assert_eq!(dropdown.position().computations(), computed);

    // Reopening uses the fresh geometry.
    let update = dropdown.open();
    println!("== Reopen ==\n  {:?}", update.snapshot.placement);
    assert_eq!(
        update.snapshot.placement.map(|p| p.coordinates),
        Some(Point::new(100.0, 330.0))
    );
}
