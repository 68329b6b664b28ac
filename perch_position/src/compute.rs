// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure placement computation.
//!
//! Everything here is a deterministic function of its inputs: the same anchor
//! rect, panel size, options and viewport always yield the same [`Placement`].

use kurbo::{Point, Rect, Size};

use crate::error::PlacementError;
use crate::types::{Align, AnchorGeometry, Overflow, Placement, PlacementOptions, Side, Strategy};

/// Place a panel of size `floating` on `side` of `reference`, start-aligned,
/// with no gap and [`Strategy::Absolute`] relative to the viewport origin.
///
/// ```
/// use kurbo::{Point, Rect, Size};
/// use perch_position::{Side, compute_placement};
///
/// let anchor = Rect::from_origin_size((100.0, 50.0), (80.0, 30.0));
/// let p = compute_placement(anchor, Size::new(192.0, 120.0), Side::Bottom);
/// assert_eq!(p.coordinates, Point::new(100.0, 80.0));
/// ```
pub fn compute_placement(reference: Rect, floating: Size, side: Side) -> Placement {
    let options = PlacementOptions {
        side,
        ..PlacementOptions::default()
    };
    compute_placement_with(reference, floating, &options, None)
}

/// Place a panel using the full set of options.
///
/// `viewport` is only consulted by [`Overflow::Flip`]; without it the
/// preferred side is always used.
pub fn compute_placement_with(
    reference: Rect,
    floating: Size,
    options: &PlacementOptions,
    viewport: Option<Rect>,
) -> Placement {
    let mut side = options.side;
    if let (Overflow::Flip, Some(viewport)) = (options.overflow, viewport) {
        let preferred = panel_origin(reference, floating, side, options);
        if !fits_main_axis(Rect::from_origin_size(preferred, floating), side, viewport) {
            let opposite = side.opposite();
            let alternative = panel_origin(reference, floating, opposite, options);
            let flipped = Rect::from_origin_size(alternative, floating);
            if fits_main_axis(flipped, opposite, viewport) {
                side = opposite;
            }
        }
    }

    let origin = panel_origin(reference, floating, side, options);
    let coordinates = match options.strategy {
        Strategy::Fixed => origin,
        Strategy::Absolute => origin - options.origin.to_vec2(),
    };
    Placement {
        side,
        align: options.align,
        strategy: options.strategy,
        coordinates,
    }
}

/// Place from possibly incomplete geometry.
pub fn try_compute(
    geometry: &AnchorGeometry,
    options: &PlacementOptions,
    viewport: Option<Rect>,
) -> Result<Placement, PlacementError> {
    let reference = geometry
        .reference
        .ok_or(PlacementError::MissingAnchorGeometry)?;
    let floating = geometry
        .floating
        .ok_or(PlacementError::MissingFloatingSize)?;
    Ok(compute_placement_with(
        reference, floating, options, viewport,
    ))
}

// Top-left corner of the panel in viewport coordinates.
fn panel_origin(reference: Rect, floating: Size, side: Side, options: &PlacementOptions) -> Point {
    let gap = options.offset;
    if side.is_vertical() {
        let x = cross_start(reference.x0, reference.x1, floating.width, options.align);
        let y = match side {
            Side::Top => reference.y0 - gap - floating.height,
            _ => reference.y1 + gap,
        };
        Point::new(x, y)
    } else {
        let y = cross_start(reference.y0, reference.y1, floating.height, options.align);
        let x = match side {
            Side::Left => reference.x0 - gap - floating.width,
            _ => reference.x1 + gap,
        };
        Point::new(x, y)
    }
}

fn cross_start(lo: f64, hi: f64, extent: f64, align: Align) -> f64 {
    match align {
        Align::Start => lo,
        Align::Center => (lo + hi - extent) * 0.5,
        Align::End => hi - extent,
    }
}

fn fits_main_axis(panel: Rect, side: Side, viewport: Rect) -> bool {
    match side {
        Side::Top => panel.y0 >= viewport.y0,
        Side::Bottom => panel.y1 <= viewport.y1,
        Side::Left => panel.x0 >= viewport.x0,
        Side::Right => panel.x1 <= viewport.x1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> Rect {
        Rect::from_origin_size((100.0, 50.0), (80.0, 30.0))
    }

    const PANEL: Size = Size::new(192.0, 120.0);

    #[test]
    fn bottom_start_sits_on_anchor_bottom_edge() {
        let p = compute_placement(anchor(), PANEL, Side::Bottom);
        assert_eq!(p.side, Side::Bottom);
        assert_eq!(p.strategy, Strategy::Absolute);
        assert_eq!(p.coordinates, Point::new(100.0, 80.0));
    }

    #[test]
    fn each_side_touches_the_matching_edge() {
        let a = anchor();
        let top = compute_placement(a, PANEL, Side::Top);
        assert_eq!(top.coordinates, Point::new(100.0, 50.0 - 120.0));
        let left = compute_placement(a, PANEL, Side::Left);
        assert_eq!(left.coordinates, Point::new(100.0 - 192.0, 50.0));
        let right = compute_placement(a, PANEL, Side::Right);
        assert_eq!(right.coordinates, Point::new(180.0, 50.0));
    }

    #[test]
    fn alignment_and_gap() {
        let options = PlacementOptions {
            align: Align::End,
            offset: 4.0,
            ..Default::default()
        };
        let p = compute_placement_with(anchor(), PANEL, &options, None);
        assert_eq!(p.coordinates, Point::new(180.0 - 192.0, 84.0));

        let options = PlacementOptions {
            side: Side::Right,
            align: Align::Center,
            ..Default::default()
        };
        let p = compute_placement_with(anchor(), Size::new(50.0, 10.0), &options, None);
        assert_eq!(p.coordinates, Point::new(180.0, 60.0));
    }

    #[test]
    fn absolute_subtracts_containing_block_origin() {
        let options = PlacementOptions {
            origin: Point::new(20.0, 10.0),
            ..Default::default()
        };
        let p = compute_placement_with(anchor(), PANEL, &options, None);
        assert_eq!(p.coordinates, Point::new(80.0, 70.0));

        let fixed = PlacementOptions {
            strategy: Strategy::Fixed,
            ..options
        };
        let p = compute_placement_with(anchor(), PANEL, &fixed, None);
        assert_eq!(
            p.coordinates,
            Point::new(100.0, 80.0),
            "origin ignored for fixed"
        );
    }

    #[test]
    fn keep_policy_never_flips() {
        let viewport = Rect::new(0.0, 0.0, 800.0, 150.0);
        let options = PlacementOptions::default();
        let p = compute_placement_with(anchor(), PANEL, &options, Some(viewport));
        assert_eq!(p.side, Side::Bottom);
    }

    #[test]
    fn flip_policy_uses_opposite_side_when_it_fits() {
        let options = PlacementOptions {
            overflow: Overflow::Flip,
            ..Default::default()
        };
        // Anchor low in a short viewport: bottom overflows, top fits.
        let a = Rect::from_origin_size((100.0, 300.0), (80.0, 30.0));
        let viewport = Rect::new(0.0, 0.0, 800.0, 400.0);
        let p = compute_placement_with(a, PANEL, &options, Some(viewport));
        assert_eq!(p.side, Side::Top);
        assert_eq!(p.coordinates, Point::new(100.0, 180.0));

        // Neither side fits: stay on the preferred side.
        let tiny = Rect::new(0.0, 0.0, 800.0, 100.0);
        let p = compute_placement_with(anchor(), PANEL, &options, Some(tiny));
        assert_eq!(p.side, Side::Bottom);
    }

    #[test]
    fn incomplete_geometry_is_reported() {
        let options = PlacementOptions::default();
        assert_eq!(
            try_compute(&AnchorGeometry::EMPTY, &options, None),
            Err(PlacementError::MissingAnchorGeometry)
        );
        let g = AnchorGeometry::EMPTY.with_reference(Some(anchor()));
        assert_eq!(
            try_compute(&g, &options, None),
            Err(PlacementError::MissingFloatingSize)
        );
        let g = g.with_floating(Some(PANEL));
        assert_eq!(
            try_compute(&g, &options, None).map(|p| p.coordinates),
            Ok(Point::new(100.0, 80.0))
        );
    }

    #[test]
    fn deterministic() {
        let options = PlacementOptions {
            overflow: Overflow::Flip,
            align: Align::Center,
            ..Default::default()
        };
        let viewport = Some(Rect::new(0.0, 0.0, 640.0, 480.0));
        let a = compute_placement_with(anchor(), PANEL, &options, viewport);
        let b = compute_placement_with(anchor(), PANEL, &options, viewport);
        assert_eq!(a, b);
    }
}
