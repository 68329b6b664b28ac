// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=perch_disclosure --heading-base-level=0

//! Perch Disclosure: a deterministic, `no_std` open/close state machine for overlays.
//!
//! ## Overview
//!
//! A disclosure is the open/closed state of a toggleable overlay: a dropdown
//! menu, a drawer, a popover. This crate tracks two things:
//!
//! - the logical [`Phase`] (`Closed` or `Open`), which only changes through
//!   [`DisclosureState::open`], [`DisclosureState::close`],
//!   [`DisclosureState::toggle`], or a dismissal routed into `close`;
//! - the [`Presence`] of the floating content (`Open`, `Closing(timer)`,
//!   `Closed`), which lags behind the phase by a configurable grace window so
//!   an exit animation can finish before the content is unmounted.
//!
//! It does not run timers or animations. Operations return
//! [`DisclosureEvent`]s; timers are [`GraceTimer`] tokens that the host
//! schedules and hands back. Reopening during the grace window cancels the
//! pending unmount instead of unmounting and remounting.
//!
//! ## Dismissal
//!
//! Outside pointer presses, Escape and navigation are [`DismissReason`]s.
//! [`DisclosureState::dismiss`] checks them against the configured
//! [`DismissTriggers`] and then calls the same `close` as an explicit request.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod dismiss;
pub mod state;
pub mod types;

pub use dismiss::{DismissReason, DismissTriggers, is_outside};
pub use state::DisclosureState;
pub use types::{DisclosureEvent, DisclosureOptions, GraceTimer, Phase, Presence};
