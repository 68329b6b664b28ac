// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dismissal signals.
//!
//! Every reason funnels into [`DisclosureState::close`](crate::DisclosureState::close);
//! this module only decides whether a signal counts.

use kurbo::{Point, Rect};

/// Why an overlay is being dismissed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DismissReason {
    /// A direct `close()` request from the host or a component.
    Explicit,
    /// A pointer press outside both the anchor and the floating panel.
    OutsidePointer,
    /// The cancellation key (Escape).
    Escape,
    /// Focus or navigation moved away (route change, Tab out).
    Navigation,
}

bitflags::bitflags! {
    /// Dismissal signals an overlay honours.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct DismissTriggers: u8 {
        /// Close on pointer presses outside anchor and panel.
        const OUTSIDE_POINTER = 0b0000_0001;
        /// Close on Escape.
        const ESCAPE          = 0b0000_0010;
        /// Close when navigation or focus moves away.
        const NAVIGATION      = 0b0000_0100;
    }
}

impl Default for DismissTriggers {
    fn default() -> Self {
        Self::all()
    }
}

impl DismissTriggers {
    /// True if `reason` should close an overlay configured with these triggers.
    pub fn allows(self, reason: DismissReason) -> bool {
        match reason {
            DismissReason::Explicit => true,
            DismissReason::OutsidePointer => self.contains(Self::OUTSIDE_POINTER),
            DismissReason::Escape => self.contains(Self::ESCAPE),
            DismissReason::Navigation => self.contains(Self::NAVIGATION),
        }
    }
}

/// True if `point` lies outside both the anchor and the floating panel.
///
/// Rects that are not mounted (`None`) contain nothing.
pub fn is_outside(point: Point, anchor: Option<Rect>, floating: Option<Rect>) -> bool {
    !anchor.is_some_and(|r| r.contains(point)) && !floating.is_some_and(|r| r.contains(point))
}
