// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stateful placement: lazy recomputation and frame-debounced geometry.
//!
//! ## Recomputation rules
//!
//! - Closed → open always recomputes, folding in any geometry sample still
//!   waiting for its frame, so a panel is never shown at a stale position.
//! - While open, a new anchor rect, a new panel size or a new viewport
//!   recomputes immediately (layout registration) or on the next frame
//!   (scroll/resize samples).
//! - While closed nothing is computed; changes only mark the placement stale.
//!   "Open" here means the panel is on screen, which includes an exit
//!   transition after the disclosure itself has closed.
//!
//! ## Frames
//!
//! [`PositionEngine::geometry_changed`] keeps only the latest sample and hands
//! out at most one outstanding [`FrameRequest`]. The host schedules it on its
//! next animation frame and returns it to [`PositionEngine::on_frame`].
//! Requests that are no longer outstanding are ignored.

use kurbo::{Rect, Size};

use crate::compute::try_compute;
use crate::types::{AnchorGeometry, GeometrySample, Placement, PlacementOptions};

/// Token for a pending animation-frame recomputation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct FrameRequest(u64);

/// Result of [`PositionEngine::on_frame`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FrameOutcome {
    /// The latest sample was applied while open; carries the fresh placement
    /// (or `None` if geometry is incomplete).
    Applied(Option<Placement>),
    /// The latest sample was stored while closed; placement is recomputed on
    /// the next open.
    Deferred,
    /// The request was cancelled or superseded and nothing was applied.
    Superseded,
}

/// Placement state for one floating panel.
#[derive(Clone, Debug)]
pub struct PositionEngine {
    options: PlacementOptions,
    geometry: AnchorGeometry,
    viewport: Option<Rect>,
    open: bool,
    placement: Option<Placement>,
    stale: bool,
    pending: Option<GeometrySample>,
    frame: Option<FrameRequest>,
    next_frame: u64,
    computations: u64,
}

impl Default for PositionEngine {
    fn default() -> Self {
        Self::new(PlacementOptions::default())
    }
}

impl PositionEngine {
    /// Create a closed engine with no geometry.
    pub fn new(options: PlacementOptions) -> Self {
        Self {
            options,
            geometry: AnchorGeometry::EMPTY,
            viewport: None,
            open: false,
            placement: None,
            stale: true,
            pending: None,
            frame: None,
            next_frame: 0,
            computations: 0,
        }
    }

    /// Current options.
    pub fn options(&self) -> &PlacementOptions {
        &self.options
    }

    /// Replace the options.
    pub fn set_options(&mut self, options: PlacementOptions) -> Option<Placement> {
        if self.options == options {
            return self.placement;
        }
        self.options = options;
        self.invalidate()
    }

    /// Geometry as of the last applied sample.
    pub fn geometry(&self) -> AnchorGeometry {
        self.geometry
    }

    /// Last computed placement.
    ///
    /// `None` until geometry is complete and the engine has been opened, and
    /// again as soon as the anchor disappears. While closed this may lag
    /// behind newer geometry; it is refreshed before the next open completes.
    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// True if geometry changed since the placement was computed.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Whether the engine considers its panel open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Number of placements computed so far.
    pub fn computations(&self) -> u64 {
        self.computations
    }

    /// Register the anchor's bounding box (or `None` once it is unmounted).
    pub fn set_reference(&mut self, reference: Option<Rect>) -> Option<Placement> {
        // A direct registration is newer than any sample waiting for a frame.
        if let Some(pending) = &mut self.pending {
            pending.reference = reference;
        }
        if self.geometry.reference == reference {
            return self.placement;
        }
        self.geometry = self.geometry.with_reference(reference);
        if reference.is_none() {
            self.placement = None;
        }
        self.invalidate()
    }

    /// Register the floating panel's measured size.
    pub fn set_floating_size(&mut self, floating: Option<Size>) -> Option<Placement> {
        if self.geometry.floating == floating {
            return self.placement;
        }
        self.geometry = self.geometry.with_floating(floating);
        self.invalidate()
    }

    /// Register the viewport used by the overflow policy.
    pub fn set_viewport(&mut self, viewport: Option<Rect>) -> Option<Placement> {
        if let Some(pending) = &mut self.pending {
            pending.viewport = viewport;
        }
        if self.viewport == viewport {
            return self.placement;
        }
        self.viewport = viewport;
        self.invalidate()
    }

    /// Follow whether the panel is shown: open, or still mounted for an exit
    /// transition.
    ///
    /// Opening recomputes once; repeated opens and closing do not compute.
    pub fn set_open(&mut self, open: bool) -> Option<Placement> {
        if self.open == open {
            return self.placement;
        }
        self.open = open;
        if open {
            if let Some(sample) = self.pending.take() {
                self.apply_sample(sample);
            }
            self.recompute()
        } else {
            tracing::trace!("position engine closed; recomputation suspended");
            self.placement
        }
    }

    /// Record a scroll/resize sample.
    ///
    /// Returns a [`FrameRequest`] if the host needs to schedule a frame; `None`
    /// if one is already outstanding, in which case this sample replaces the
    /// one that request will apply.
    pub fn geometry_changed(&mut self, sample: GeometrySample) -> Option<FrameRequest> {
        self.pending = Some(sample);
        if self.frame.is_some() {
            return None;
        }
        let request = FrameRequest(self.next_frame);
        self.next_frame += 1;
        self.frame = Some(request);
        Some(request)
    }

    /// The frame request currently outstanding, if any.
    pub fn pending_frame(&self) -> Option<FrameRequest> {
        self.frame
    }

    /// Apply the latest sample for an animation frame.
    pub fn on_frame(&mut self, request: FrameRequest) -> FrameOutcome {
        if self.frame != Some(request) {
            tracing::debug!(?request, "dropping superseded frame request");
            return FrameOutcome::Superseded;
        }
        self.frame = None;
        // `set_open` may already have folded the sample in.
        let Some(sample) = self.pending.take() else {
            return if self.open {
                FrameOutcome::Applied(self.placement)
            } else {
                FrameOutcome::Deferred
            };
        };
        let changed = self.apply_sample(sample);
        if !self.open {
            return FrameOutcome::Deferred;
        }
        if changed || self.stale {
            FrameOutcome::Applied(self.recompute())
        } else {
            FrameOutcome::Applied(self.placement)
        }
    }

    /// Drop any outstanding frame request and its sample.
    pub fn cancel_frame(&mut self) {
        if let Some(request) = self.frame.take() {
            tracing::trace!(?request, "frame request cancelled");
        }
        self.pending = None;
    }

    // Returns true if the sample differs from the applied geometry.
    fn apply_sample(&mut self, sample: GeometrySample) -> bool {
        let mut changed = false;
        if sample.reference != self.geometry.reference {
            self.geometry = self.geometry.with_reference(sample.reference);
            if sample.reference.is_none() {
                self.placement = None;
            }
            changed = true;
        }
        if sample.viewport.is_some() && sample.viewport != self.viewport {
            self.viewport = sample.viewport;
            changed = true;
        }
        if changed {
            self.stale = true;
        }
        changed
    }

    fn invalidate(&mut self) -> Option<Placement> {
        self.stale = true;
        if self.open {
            self.recompute()
        } else {
            self.placement
        }
    }

    fn recompute(&mut self) -> Option<Placement> {
        match try_compute(&self.geometry, &self.options, self.viewport) {
            Ok(placement) => {
                self.computations += 1;
                self.stale = false;
                self.placement = Some(placement);
                tracing::trace!(?placement, "placement computed");
            }
            Err(err) => {
                tracing::debug!(%err, "placement deferred");
                self.placement = None;
            }
        }
        self.placement
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Overflow, Side};
    use kurbo::Point;

    fn anchor_at(x: f64, y: f64) -> Rect {
        Rect::from_origin_size((x, y), (80.0, 30.0))
    }

    const PANEL: Size = Size::new(192.0, 120.0);

    fn ready_engine() -> PositionEngine {
        let mut engine = PositionEngine::default();
        engine.set_reference(Some(anchor_at(100.0, 50.0)));
        engine.set_floating_size(Some(PANEL));
        engine
    }

    #[test]
    fn closed_engine_does_not_compute() {
        let engine = ready_engine();
        assert_eq!(engine.computations(), 0);
        assert_eq!(engine.placement(), None);
    }

    #[test]
    fn open_computes_once_and_is_idempotent() {
        let mut engine = ready_engine();
        let p = engine.set_open(true).unwrap();
        assert_eq!(p.side, Side::Bottom);
        assert_eq!(p.coordinates, Point::new(100.0, 80.0));
        engine.set_open(true);
        assert_eq!(engine.computations(), 1, "second open must not recompute");
    }

    #[test]
    fn missing_anchor_suppresses_placement() {
        let mut engine = PositionEngine::default();
        engine.set_floating_size(Some(PANEL));
        assert_eq!(engine.set_open(true), None);
        assert_eq!(engine.computations(), 0);

        // Resolves once the anchor mounts.
        let p = engine.set_reference(Some(anchor_at(0.0, 0.0)));
        assert_eq!(p.map(|p| p.coordinates), Some(Point::new(0.0, 30.0)));

        // And disappears again when it unmounts.
        assert_eq!(engine.set_reference(None), None);
    }

    #[test]
    fn floating_size_arriving_after_open_places_the_panel() {
        let mut engine = PositionEngine::default();
        engine.set_reference(Some(anchor_at(100.0, 50.0)));
        assert_eq!(engine.set_open(true), None, "panel not measured yet");
        let p = engine.set_floating_size(Some(PANEL));
        assert_eq!(p.map(|p| p.coordinates), Some(Point::new(100.0, 80.0)));
    }

    #[test]
    fn frames_are_debounced_and_last_sample_wins() {
        let mut engine = ready_engine();
        engine.set_open(true);

        let first = engine.geometry_changed(GeometrySample {
            reference: Some(anchor_at(100.0, 40.0)),
            viewport: None,
        });
        let request = first.expect("first sample schedules a frame");
        for y in [30.0, 20.0, 10.0] {
            let again = engine.geometry_changed(GeometrySample {
                reference: Some(anchor_at(100.0, y)),
                viewport: None,
            });
            assert_eq!(again, None, "one frame outstanding at a time");
        }
        let outcome = engine.on_frame(request);
        let FrameOutcome::Applied(Some(p)) = outcome else {
            panic!("expected an applied placement, got {outcome:?}");
        };
        assert_eq!(p.coordinates, Point::new(100.0, 40.0));
        assert_eq!(engine.computations(), 2);

        // Replaying the same request is a no-op.
        assert_eq!(engine.on_frame(request), FrameOutcome::Superseded);
    }

    #[test]
    fn cancelled_frame_is_superseded() {
        let mut engine = ready_engine();
        engine.set_open(true);
        let request = engine
            .geometry_changed(GeometrySample {
                reference: Some(anchor_at(5.0, 5.0)),
                viewport: None,
            })
            .unwrap();
        engine.cancel_frame();
        assert_eq!(engine.on_frame(request), FrameOutcome::Superseded);
        assert_eq!(
            engine.placement().map(|p| p.coordinates),
            Some(Point::new(100.0, 80.0))
        );
    }

    #[test]
    fn changes_while_closed_are_deferred_until_open() {
        let mut engine = ready_engine();
        engine.set_open(true);
        engine.set_open(false);
        let request = engine
            .geometry_changed(GeometrySample {
                reference: Some(anchor_at(10.0, 10.0)),
                viewport: None,
            })
            .unwrap();
        assert_eq!(engine.on_frame(request), FrameOutcome::Deferred);
        assert_eq!(engine.computations(), 1);
        assert!(engine.is_stale());

        let p = engine.set_open(true).unwrap();
        assert_eq!(p.coordinates, Point::new(10.0, 40.0));
        assert_eq!(engine.computations(), 2);
    }

    #[test]
    fn open_folds_in_a_sample_still_waiting_for_its_frame() {
        let mut engine = ready_engine();
        let request = engine
            .geometry_changed(GeometrySample {
                reference: Some(anchor_at(300.0, 200.0)),
                viewport: None,
            })
            .unwrap();
        let p = engine.set_open(true).unwrap();
        assert_eq!(p.coordinates, Point::new(300.0, 230.0));
        // The frame still fires, but there is nothing new to apply.
        assert_eq!(engine.on_frame(request), FrameOutcome::Applied(Some(p)));
        assert_eq!(engine.computations(), 1);
    }

    #[test]
    fn direct_registration_overrides_an_older_pending_sample() {
        let mut engine = ready_engine();
        engine.set_open(true);
        let request = engine
            .geometry_changed(GeometrySample {
                reference: Some(anchor_at(1.0, 1.0)),
                viewport: None,
            })
            .unwrap();
        engine.set_reference(Some(anchor_at(200.0, 200.0)));
        let _ = engine.on_frame(request);
        assert_eq!(
            engine.placement().map(|p| p.coordinates),
            Some(Point::new(200.0, 230.0))
        );
    }

    #[test]
    fn unchanged_sample_does_not_recompute() {
        let mut engine = ready_engine();
        engine.set_open(true);
        let request = engine
            .geometry_changed(GeometrySample {
                reference: Some(anchor_at(100.0, 50.0)),
                viewport: None,
            })
            .unwrap();
        let _ = engine.on_frame(request);
        assert_eq!(engine.computations(), 1);
    }

    #[test]
    fn viewport_resize_flips_on_next_frame() {
        let anchor = anchor_at(100.0, 300.0);
        let mut engine = PositionEngine::new(PlacementOptions {
            overflow: Overflow::Flip,
            ..PlacementOptions::default()
        });
        engine.set_reference(Some(anchor));
        engine.set_floating_size(Some(PANEL));
        engine.set_viewport(Some(Rect::new(0.0, 0.0, 800.0, 800.0)));
        assert_eq!(engine.set_open(true).map(|p| p.side), Some(Side::Bottom));

        // Same anchor, shorter window: the bottom no longer fits.
        let sample = GeometrySample {
            reference: Some(anchor),
            viewport: Some(Rect::new(0.0, 0.0, 800.0, 400.0)),
        };
        let request = engine.geometry_changed(sample).unwrap();
        let FrameOutcome::Applied(Some(p)) = engine.on_frame(request) else {
            panic!("expected a recomputed placement");
        };
        assert_eq!(p.side, Side::Top);
        assert_eq!(p.coordinates, Point::new(100.0, 180.0));
        assert_eq!(engine.computations(), 2);
    }
}
