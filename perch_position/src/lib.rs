// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=perch_position --heading-base-level=0

//! Perch Position: Kurbo-native placement of floating panels next to an anchor.
//!
//! ## Overview
//!
//! Given the anchor's bounding box and the floating panel's measured size, this
//! crate computes where the panel goes: the [`Side`] actually used, the
//! [`Strategy`] the coordinates are expressed in, and the panel's top-left
//! corner. [`compute_placement`] and [`compute_placement_with`] are pure;
//! [`PositionEngine`] wraps them with the bookkeeping a UI needs:
//!
//! - geometry is optional until both the anchor and the panel have been measured,
//!   and no placement exists until then ([`PlacementError`] says why);
//! - nothing is computed while the panel is closed;
//! - scroll and resize samples are coalesced to at most one recomputation per
//!   animation frame via [`FrameRequest`] tokens.
//!
//! ## Overflow
//!
//! With the default [`Overflow::Keep`] the preferred side is always used.
//! [`Overflow::Flip`] switches to the opposite side when the preferred one
//! overflows the viewport on the main axis and the opposite one fits.
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::{Point, Rect, Size};
//! use perch_position::{FrameOutcome, GeometrySample, PositionEngine};
//!
//! let mut engine = PositionEngine::default();
//! engine.set_reference(Some(Rect::from_origin_size((100.0, 50.0), (80.0, 30.0))));
//! engine.set_floating_size(Some(Size::new(192.0, 120.0)));
//!
//! // Opening computes the placement.
//! let p = engine.set_open(true).unwrap();
//! assert_eq!(p.coordinates, Point::new(100.0, 80.0));
//!
//! // A scroll moves the anchor; the host runs the request on its next frame.
//! let request = engine
//!     .geometry_changed(GeometrySample {
//!         reference: Some(Rect::from_origin_size((100.0, 20.0), (80.0, 30.0))),
//!         viewport: None,
//!     })
//!     .unwrap();
//! let FrameOutcome::Applied(Some(p)) = engine.on_frame(request) else { unreachable!() };
//! assert_eq!(p.coordinates, Point::new(100.0, 50.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod compute;
mod engine;
mod error;
mod provider;
mod types;

pub use compute::{compute_placement, compute_placement_with, try_compute};
pub use engine::{FrameOutcome, FrameRequest, PositionEngine};
pub use error::PlacementError;
pub use provider::GeometryProvider;
pub use types::{
    Align, AnchorGeometry, GeometrySample, Overflow, Placement, PlacementOptions, Side, Strategy,
};
