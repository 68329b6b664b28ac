// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for disclosure: phases, presence, timers, events and options.

use core::time::Duration;

use crate::dismiss::DismissTriggers;

/// Logical open/closed phase.
///
/// Entering and leaving animations are not phases; they are tracked by
/// [`Presence`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Phase {
    /// The overlay is closed.
    #[default]
    Closed,
    /// The overlay is open.
    Open,
}

/// Token for a pending exit-unmount.
///
/// Handed out in [`DisclosureEvent::UnmountScheduled`]. The host runs a timer
/// for [`GraceTimer::delay`] and then passes the token back to
/// [`DisclosureState::grace_elapsed`](crate::DisclosureState::grace_elapsed).
/// Tokens that were cancelled by a reopen are ignored.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct GraceTimer {
    pub(crate) id: u64,
    pub(crate) delay: Duration,
}

impl GraceTimer {
    /// How long the host should wait before returning the token.
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

/// Whether the floating content is mounted.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Presence {
    /// Mounted and open.
    Open,
    /// Closed but still mounted while the exit animation runs.
    Closing(GraceTimer),
    /// Unmounted.
    #[default]
    Closed,
}

impl Presence {
    /// True while the content should stay in the tree.
    pub const fn is_mounted(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// A transition reported by [`DisclosureState`](crate::DisclosureState).
///
/// Events are returned in the order they happened; the phase change always
/// comes first.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DisclosureEvent {
    /// Phase became [`Phase::Open`].
    Opened,
    /// Phase became [`Phase::Closed`].
    Closed,
    /// Content must be mounted.
    Mounted,
    /// Content stays mounted until the timer elapses.
    UnmountScheduled(GraceTimer),
    /// A reopen cancelled the pending unmount; content stays mounted.
    UnmountCancelled(GraceTimer),
    /// Content must be unmounted.
    Unmounted,
}

/// Disclosure configuration.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisclosureOptions {
    /// How long content stays mounted after closing. Zero unmounts at once.
    pub grace_window: Duration,
    /// Which dismissal signals close the overlay. Explicit closes always do.
    pub dismiss_on: DismissTriggers,
}

impl Default for DisclosureOptions {
    fn default() -> Self {
        Self {
            grace_window: Duration::ZERO,
            dismiss_on: DismissTriggers::default(),
        }
    }
}

impl DisclosureOptions {
    /// Options with the given grace window and every dismissal trigger.
    pub fn with_grace_window(grace_window: Duration) -> Self {
        Self {
            grace_window,
            ..Self::default()
        }
    }
}
