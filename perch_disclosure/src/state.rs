// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The disclosure state machine.
//!
//! ## Usage
//!
//! 1) Call [`DisclosureState::open`], [`DisclosureState::close`] or
//!    [`DisclosureState::toggle`] in response to input, or
//!    [`DisclosureState::dismiss`] for outside presses, Escape and navigation.
//! 2) Apply the returned [`DisclosureEvent`]s in order: recompute placement on
//!    `Opened`, mount on `Mounted`, start a timer on `UnmountScheduled`.
//! 3) When a timer fires, hand its token to [`DisclosureState::grace_elapsed`].
//!
//! ## Minimal example
//!
//! ```
//! use core::time::Duration;
//! use perch_disclosure::{DisclosureEvent, DisclosureOptions, DisclosureState};
//!
//! let mut d = DisclosureState::new(DisclosureOptions::with_grace_window(Duration::from_millis(75)));
//! assert_eq!(d.open(), vec![DisclosureEvent::Opened, DisclosureEvent::Mounted]);
//!
//! let ev = d.close();
//! let DisclosureEvent::UnmountScheduled(timer) = ev[1] else { unreachable!() };
//! assert_eq!(timer.delay(), Duration::from_millis(75));
//!
//! // Reopening inside the window keeps the content mounted.
//! assert_eq!(d.open(), vec![DisclosureEvent::Opened, DisclosureEvent::UnmountCancelled(timer)]);
//! assert!(d.grace_elapsed(timer).is_empty());
//! ```

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::dismiss::{DismissReason, is_outside};
use crate::types::{DisclosureEvent, DisclosureOptions, GraceTimer, Phase, Presence};

/// Open/close state of one overlay.
///
/// Owned by a single overlay instance; create it when the overlay mounts and
/// drop it on unmount.
#[derive(Clone, Debug, Default)]
pub struct DisclosureState {
    phase: Phase,
    presence: Presence,
    options: DisclosureOptions,
    next_timer: u64,
}

impl DisclosureState {
    /// Create a closed, unmounted disclosure.
    pub fn new(options: DisclosureOptions) -> Self {
        Self {
            phase: Phase::Closed,
            presence: Presence::Closed,
            options,
            next_timer: 0,
        }
    }

    /// Current options.
    pub fn options(&self) -> &DisclosureOptions {
        &self.options
    }

    /// Replace the options. A pending unmount keeps its original delay.
    pub fn set_options(&mut self, options: DisclosureOptions) {
        self.options = options;
    }

    /// Logical phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Mount state.
    pub fn presence(&self) -> Presence {
        self.presence
    }

    /// Render-time accessor for consumers.
    pub fn is_open(&self) -> bool {
        self.phase == Phase::Open
    }

    /// True while content should stay mounted (open or closing).
    pub fn is_mounted(&self) -> bool {
        self.presence.is_mounted()
    }

    /// Open. No-op if already open.
    pub fn open(&mut self) -> Vec<DisclosureEvent> {
        let mut out = Vec::new();
        if self.phase == Phase::Open {
            return out;
        }
        self.phase = Phase::Open;
        out.push(DisclosureEvent::Opened);
        match self.presence {
            Presence::Closed => out.push(DisclosureEvent::Mounted),
            Presence::Closing(timer) => {
                tracing::trace!(?timer, "reopened during grace window");
                out.push(DisclosureEvent::UnmountCancelled(timer));
            }
            Presence::Open => {}
        }
        self.presence = Presence::Open;
        tracing::trace!(presence = ?self.presence, "disclosure opened");
        out
    }

    /// Close. No-op if already closed.
    ///
    /// With a non-zero grace window the content stays mounted and an
    /// [`DisclosureEvent::UnmountScheduled`] timer is returned.
    pub fn close(&mut self) -> Vec<DisclosureEvent> {
        let mut out = Vec::new();
        if self.phase == Phase::Closed {
            return out;
        }
        self.phase = Phase::Closed;
        out.push(DisclosureEvent::Closed);
        if self.options.grace_window.is_zero() {
            self.presence = Presence::Closed;
            out.push(DisclosureEvent::Unmounted);
        } else {
            let timer = GraceTimer {
                id: self.next_timer,
                delay: self.options.grace_window,
            };
            self.next_timer += 1;
            self.presence = Presence::Closing(timer);
            out.push(DisclosureEvent::UnmountScheduled(timer));
        }
        tracing::trace!(presence = ?self.presence, "disclosure closed");
        out
    }

    /// Flip the phase.
    pub fn toggle(&mut self) -> Vec<DisclosureEvent> {
        match self.phase {
            Phase::Open => self.close(),
            Phase::Closed => self.open(),
        }
    }

    /// Drive the phase from a controlled `is_open` value.
    pub fn set_open(&mut self, open: bool) -> Vec<DisclosureEvent> {
        if open { self.open() } else { self.close() }
    }

    /// Close for `reason` if the configured triggers allow it.
    pub fn dismiss(&mut self, reason: DismissReason) -> Vec<DisclosureEvent> {
        if !self.options.dismiss_on.allows(reason) {
            tracing::trace!(?reason, "dismissal ignored by configuration");
            return Vec::new();
        }
        self.close()
    }

    /// Handle a pointer press: dismisses when open and `point` is outside both
    /// the anchor and the floating panel.
    pub fn pointer_down(
        &mut self,
        point: Point,
        anchor: Option<Rect>,
        floating: Option<Rect>,
    ) -> Vec<DisclosureEvent> {
        if self.phase == Phase::Open && is_outside(point, anchor, floating) {
            self.dismiss(DismissReason::OutsidePointer)
        } else {
            Vec::new()
        }
    }

    /// Finish a pending unmount. Cancelled or unknown timers are ignored.
    pub fn grace_elapsed(&mut self, timer: GraceTimer) -> Vec<DisclosureEvent> {
        let mut out = Vec::new();
        if self.presence != Presence::Closing(timer) {
            tracing::debug!(?timer, "ignoring stale grace timer");
            return out;
        }
        self.presence = Presence::Closed;
        out.push(DisclosureEvent::Unmounted);
        out
    }
}
