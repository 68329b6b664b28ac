// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value types for placement: sides, alignment, strategy, geometry samples and options.

use kurbo::{Point, Rect, Size};

/// Preferred edge of the anchor the floating panel is attached to.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    /// Above the anchor.
    Top,
    /// Below the anchor.
    #[default]
    Bottom,
    /// Left of the anchor.
    Left,
    /// Right of the anchor.
    Right,
}

impl Side {
    /// The side across the anchor from this one.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// True for `Top` and `Bottom`, whose main axis is vertical.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Alignment of the floating panel along the anchor's cross axis.
///
/// For `Top`/`Bottom` placements `Start` aligns left edges; for
/// `Left`/`Right` placements it aligns top edges.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Align {
    /// Align the leading edges.
    #[default]
    Start,
    /// Center the panel on the anchor.
    Center,
    /// Align the trailing edges.
    End,
}

/// Positioning strategy, in CSS terms.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Coordinates are relative to the containing block's origin
    /// ([`PlacementOptions::origin`]).
    #[default]
    Absolute,
    /// Coordinates are relative to the viewport.
    Fixed,
}

/// What to do when the preferred side does not fit in the viewport.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Overflow {
    /// Always use the preferred side, even if the panel leaves the viewport.
    #[default]
    Keep,
    /// Use the opposite side when the preferred side overflows on the main
    /// axis and the opposite side fits.
    Flip,
}

/// Resolved placement for a floating panel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// The side actually used (may differ from the preferred side with [`Overflow::Flip`]).
    pub side: Side,
    /// Cross-axis alignment.
    pub align: Align,
    /// Positioning strategy the coordinates are expressed in.
    pub strategy: Strategy,
    /// Top-left corner of the floating panel.
    pub coordinates: Point,
}

impl Placement {
    /// The floating panel's rectangle for a given panel size, in the
    /// placement's coordinate space.
    pub fn rect(&self, floating: Size) -> Rect {
        Rect::from_origin_size(self.coordinates, floating)
    }
}

/// Geometry the engine places from.
///
/// Both parts are optional: the anchor may not be mounted yet, and the
/// floating panel's size is only known after it has been mounted and measured.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AnchorGeometry {
    /// Anchor bounding box in viewport coordinates.
    pub reference: Option<Rect>,
    /// Intrinsic size of the floating panel.
    pub floating: Option<Size>,
}

impl AnchorGeometry {
    /// Geometry with nothing known yet.
    pub const EMPTY: Self = Self {
        reference: None,
        floating: None,
    };

    /// Returns a copy with the reference rect replaced.
    #[must_use]
    pub const fn with_reference(self, reference: Option<Rect>) -> Self {
        Self { reference, ..self }
    }

    /// Returns a copy with the floating size replaced.
    #[must_use]
    pub const fn with_floating(self, floating: Option<Size>) -> Self {
        Self { floating, ..self }
    }

    /// True once both the anchor rect and the floating size are known.
    pub const fn is_complete(&self) -> bool {
        self.reference.is_some() && self.floating.is_some()
    }
}

/// A geometry sample delivered on scroll or resize.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GeometrySample {
    /// Anchor bounding box, or `None` if the anchor is no longer measurable.
    pub reference: Option<Rect>,
    /// Current viewport, when known.
    pub viewport: Option<Rect>,
}

/// Placement options.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlacementOptions {
    /// Preferred side.
    pub side: Side,
    /// Cross-axis alignment.
    pub align: Align,
    /// Positioning strategy.
    pub strategy: Strategy,
    /// Gap between anchor and panel along the main axis.
    pub offset: f64,
    /// Overflow policy.
    pub overflow: Overflow,
    /// Viewport position of the containing block, subtracted from the
    /// coordinates when the strategy is [`Strategy::Absolute`].
    pub origin: Point,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            side: Side::Bottom,
            align: Align::Start,
            strategy: Strategy::Absolute,
            offset: 0.0,
            overflow: Overflow::Keep,
            origin: Point::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for side in [Side::Top, Side::Bottom, Side::Left, Side::Right] {
            assert_eq!(side.opposite().opposite(), side);
            assert_eq!(side.opposite().is_vertical(), side.is_vertical());
        }
    }

    #[test]
    fn geometry_completeness() {
        let g = AnchorGeometry::EMPTY;
        assert!(!g.is_complete());
        let g = g.with_reference(Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert!(!g.is_complete(), "floating size still unknown");
        let g = g.with_floating(Some(Size::new(5.0, 5.0)));
        assert!(g.is_complete());
        assert!(!g.with_reference(None).is_complete());
    }

    #[test]
    fn placement_rect_uses_coordinates_as_origin() {
        let p = Placement {
            side: Side::Bottom,
            align: Align::Start,
            strategy: Strategy::Fixed,
            coordinates: Point::new(3.0, 4.0),
        };
        assert_eq!(
            p.rect(Size::new(10.0, 20.0)),
            Rect::new(3.0, 4.0, 13.0, 24.0)
        );
    }
}
