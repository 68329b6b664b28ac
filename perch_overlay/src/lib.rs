// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=perch_overlay --heading-base-level=0

//! Perch Overlay: headless anchored dropdown menus and drawers.
//!
//! ## Overview
//!
//! A [`Dropdown`] composes a [`DisclosureState`](perch_disclosure::DisclosureState)
//! (is it open, is the menu still mounted), a
//! [`PositionEngine`](perch_position::PositionEngine) (where the menu goes)
//! and an [`ItemList`] (which item is active). Every operation returns a
//! [`DropdownUpdate`] holding one new [`DropdownSnapshot`] and the events the
//! host has to act on.
//!
//! Three consumers read the dropdown through a [`DropdownContext`]:
//!
//! - [`DropdownTrigger`]: toggles the menu and registers itself as the anchor;
//! - [`DropdownMenu`]: turns a snapshot into a [`MenuRender`] and holds the
//!   menu's entry in the shared [`PortalLayer`];
//! - [`DropdownItem`]: derives its [`ItemState`] and activates on click.
//!
//! Nothing here draws, runs timers or listens to the platform. The host feeds
//! in layout, pointer, keyboard, scroll and timer input and applies the
//! returned render state.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect, Size};
//! use perch_overlay::{
//!     Dropdown, DropdownItem, DropdownMenu, DropdownOptions, DropdownTrigger, ItemConfig,
//!     MenuRender, PortalLayer,
//! };
//!
//! let mut portal = PortalLayer::new();
//! let mut dropdown = Dropdown::with_items(DropdownOptions::default(), [ItemConfig::default(); 3]);
//! let mut trigger = DropdownTrigger::new();
//! let mut menu = DropdownMenu::new();
//!
//! trigger.layout(&mut dropdown, Rect::new(100.0, 50.0, 180.0, 80.0));
//! let update = trigger.activate(&mut dropdown);
//! assert!(matches!(menu.sync(&update.snapshot, &mut portal), MenuRender::Measuring { .. }));
//!
//! let update = menu.measured(&mut dropdown, Size::new(192.0, 120.0));
//! let MenuRender::Visible(frame) = menu.sync(&update.snapshot, &mut portal) else {
//!     unreachable!()
//! };
//! assert_eq!(frame.placement.coordinates, Point::new(100.0, 80.0));
//!
//! let update = DropdownItem::new(1).click(&mut dropdown);
//! assert_eq!(update.selected(), Some(1));
//! assert!(!update.snapshot.is_open);
//! ```
//!
//! The [`drawer`] module has the slide-in panel, which shares the disclosure
//! machinery but is controlled by the host.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod drawer;
pub mod items;
pub mod portal;
pub mod tokens;

mod dropdown;
mod error;
mod menu;
mod options;
mod trigger;

pub use drawer::{Drawer, DrawerEvent, DrawerOptions, DrawerSize};
pub use dropdown::{Dropdown, DropdownContext, DropdownEvent, DropdownSnapshot, DropdownUpdate, Key};
pub use error::DrawerError;
pub use items::{ItemConfig, ItemList, ItemState};
pub use menu::{DropdownItem, DropdownMenu, ItemRender, Layer, MenuFrame, MenuRender};
pub use options::{DEFAULT_MENU_GRACE_WINDOW, DropdownOptions};
pub use portal::{PortalLayer, PortalSlot};
pub use tokens::{Rounded, Shadow};
pub use trigger::{DropdownTrigger, TriggerRender};

pub use perch_disclosure::{DisclosureEvent, DismissReason, DismissTriggers, GraceTimer};
pub use perch_position::{
    Align, AnchorGeometry, FrameRequest, GeometrySample, Overflow, Placement, PlacementOptions,
    Side, Strategy,
};
