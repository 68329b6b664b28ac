// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dropdown context: disclosure + placement + items + tokens.
//!
//! ## Overview
//!
//! A [`Dropdown`] exclusively owns one [`DisclosureState`], one
//! [`PositionEngine`] and one [`ItemList`]. Every operation applies the phase
//! change first, then the dependent placement work, and then publishes a
//! single new [`DropdownSnapshot`]. Consumers never see a new `is_open` next to
//! an old placement.
//!
//! Consumers ([`DropdownTrigger`](crate::DropdownTrigger),
//! [`DropdownMenu`](crate::DropdownMenu), [`DropdownItem`](crate::DropdownItem))
//! read a [`DropdownContext`] borrowed from the dropdown and passed down the
//! component tree by reference.
//!
//! ## Host loop
//!
//! Each operation returns a [`DropdownUpdate`]. Besides the new snapshot it
//! carries [`DropdownEvent`]s for the host:
//! - `Disclosure(UnmountScheduled(timer))`: start a timer, then call
//!   [`Dropdown::grace_elapsed`];
//! - `FrameRequested(request)`: call [`Dropdown::on_frame`] on the next
//!   animation frame;
//! - `Selected(index)`: run the item's action.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use perch_disclosure::{DisclosureEvent, DisclosureState, DismissReason, GraceTimer};
use perch_position::{
    AnchorGeometry, FrameOutcome, FrameRequest, GeometrySample, Placement, PositionEngine, Strategy,
};

use crate::items::{ItemConfig, ItemList, ItemState};
use crate::options::DropdownOptions;
use crate::tokens::{Rounded, Shadow};

/// Keys the dropdown reacts to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    /// Activate.
    Enter,
    /// Activate.
    Space,
    /// Cancel.
    Escape,
    /// Next item (or open and focus the first).
    ArrowDown,
    /// Previous item (or open and focus the last).
    ArrowUp,
    /// First item.
    Home,
    /// Last item.
    End,
    /// Focus leaves the menu.
    Tab,
}

/// Something the host has to act on.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DropdownEvent {
    /// A disclosure transition (mount, unmount, grace timers).
    Disclosure(DisclosureEvent),
    /// Schedule [`Dropdown::on_frame`] for the next animation frame.
    FrameRequested(FrameRequest),
    /// Item `index` was activated; run its action.
    Selected(usize),
}

/// Immutable view of a dropdown's state, rebuilt once per change.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DropdownSnapshot {
    /// Incremented once per published change.
    pub revision: u64,
    /// Revision at which the dropdown was last opened.
    pub opened_revision: u64,
    /// Logical phase.
    pub is_open: bool,
    /// Whether the menu is mounted (open, or closing within the grace window).
    pub mounted: bool,
    /// Geometry the placement was computed from.
    pub geometry: AnchorGeometry,
    /// Where the menu goes, if it can be placed.
    pub placement: Option<Placement>,
    /// The active item.
    pub active_item: Option<usize>,
    /// Rounding token.
    pub rounded: Rounded,
    /// Shadow token.
    pub shadow: Shadow,
    /// Render into the portal layer.
    pub in_portal: bool,
}

impl DropdownSnapshot {
    /// Closed but still mounted for the exit transition.
    pub fn is_closing(&self) -> bool {
        self.mounted && !self.is_open
    }
}

/// Result of a dropdown operation.
#[derive(Clone, Debug, PartialEq)]
pub struct DropdownUpdate {
    /// The current snapshot after the operation.
    pub snapshot: DropdownSnapshot,
    /// Events for the host, in order.
    pub events: Vec<DropdownEvent>,
}

impl DropdownUpdate {
    /// The grace timer to schedule, if the operation started one.
    pub fn grace_timer(&self) -> Option<GraceTimer> {
        self.events.iter().find_map(|e| match e {
            DropdownEvent::Disclosure(DisclosureEvent::UnmountScheduled(t)) => Some(*t),
            _ => None,
        })
    }

    /// The frame to schedule, if the operation requested one.
    pub fn frame_request(&self) -> Option<FrameRequest> {
        self.events.iter().find_map(|e| match e {
            DropdownEvent::FrameRequested(r) => Some(*r),
            _ => None,
        })
    }

    /// The item activated by the operation.
    pub fn selected(&self) -> Option<usize> {
        self.events.iter().find_map(|e| match e {
            DropdownEvent::Selected(i) => Some(*i),
            _ => None,
        })
    }

    /// True if the operation emitted `event`.
    pub fn contains(&self, event: DisclosureEvent) -> bool {
        self.events.contains(&DropdownEvent::Disclosure(event))
    }
}

/// Read-only context handed to consumers.
#[derive(Copy, Clone, Debug)]
pub struct DropdownContext<'a> {
    snapshot: DropdownSnapshot,
    items: &'a ItemList,
}

impl<'a> DropdownContext<'a> {
    /// The snapshot this context was taken from.
    pub fn snapshot(&self) -> &DropdownSnapshot {
        &self.snapshot
    }

    /// The menu items.
    pub fn items(&self) -> &'a ItemList {
        self.items
    }

    /// Derived state of item `index`.
    pub fn item_state(&self, index: usize) -> ItemState {
        self.items.state_of(index)
    }
}

/// One dropdown: owns its disclosure, placement and items.
#[derive(Clone, Debug)]
pub struct Dropdown {
    options: DropdownOptions,
    disclosure: DisclosureState,
    position: PositionEngine,
    items: ItemList,
    snapshot: DropdownSnapshot,
}

impl Default for Dropdown {
    fn default() -> Self {
        Self::new(DropdownOptions::default())
    }
}

impl Dropdown {
    /// Create a closed dropdown with no items.
    pub fn new(options: DropdownOptions) -> Self {
        let disclosure = DisclosureState::new(options.disclosure());
        let position = PositionEngine::new(options.placement);
        let mut dropdown = Self {
            options,
            disclosure,
            position,
            items: ItemList::new(),
            snapshot: DropdownSnapshot {
                revision: 0,
                opened_revision: 0,
                is_open: false,
                mounted: false,
                geometry: AnchorGeometry::EMPTY,
                placement: None,
                active_item: None,
                rounded: options.rounded,
                shadow: options.shadow,
                in_portal: options.in_portal,
            },
        };
        dropdown.snapshot = dropdown.capture(0, 0);
        dropdown
    }

    /// Create a closed dropdown with the given items.
    pub fn with_items(
        options: DropdownOptions,
        items: impl IntoIterator<Item = ItemConfig>,
    ) -> Self {
        let mut dropdown = Self::new(options);
        dropdown.items.replace(items);
        dropdown.snapshot = dropdown.capture(0, 0);
        dropdown
    }

    /// Current options.
    pub fn options(&self) -> &DropdownOptions {
        &self.options
    }

    /// Replace the options.
    pub fn set_options(&mut self, options: DropdownOptions) -> DropdownUpdate {
        self.disclosure.set_options(options.disclosure());
        self.position.set_options(options.placement);
        self.options = options;
        self.publish(Vec::new(), false)
    }

    /// The latest published snapshot.
    pub fn snapshot(&self) -> DropdownSnapshot {
        self.snapshot
    }

    /// Context for consumers.
    pub fn context(&self) -> DropdownContext<'_> {
        DropdownContext {
            snapshot: self.snapshot,
            items: &self.items,
        }
    }

    /// The menu items.
    pub fn items(&self) -> &ItemList {
        &self.items
    }

    /// The placement engine, for inspection.
    pub fn position(&self) -> &PositionEngine {
        &self.position
    }

    /// Render-time accessor.
    pub fn is_open(&self) -> bool {
        self.disclosure.is_open()
    }

    /// Open. No-op if open.
    pub fn open(&mut self) -> DropdownUpdate {
        let events = self.disclosure.open();
        self.apply(events, Vec::new())
    }

    /// Close. No-op if closed.
    pub fn close(&mut self) -> DropdownUpdate {
        let events = self.disclosure.close();
        self.apply(events, Vec::new())
    }

    /// Flip open/closed.
    pub fn toggle(&mut self) -> DropdownUpdate {
        let events = self.disclosure.toggle();
        self.apply(events, Vec::new())
    }

    /// Close for an external reason, if the options allow it.
    pub fn dismiss(&mut self, reason: DismissReason) -> DropdownUpdate {
        let events = self.disclosure.dismiss(reason);
        self.apply(events, Vec::new())
    }

    /// A pointer press anywhere in the window (viewport coordinates).
    ///
    /// Presses outside both the trigger and the menu dismiss the dropdown.
    pub fn pointer_down(&mut self, point: Point) -> DropdownUpdate {
        let anchor = self.position.geometry().reference;
        let floating = self.floating_rect();
        let events = self.disclosure.pointer_down(point, anchor, floating);
        self.apply(events, Vec::new())
    }

    /// A grace timer fired.
    pub fn grace_elapsed(&mut self, timer: GraceTimer) -> DropdownUpdate {
        let events = self.disclosure.grace_elapsed(timer);
        self.apply(events, Vec::new())
    }

    /// Register the trigger's bounding box, or `None` when it unmounts.
    pub fn set_anchor(&mut self, anchor: Option<Rect>) -> DropdownUpdate {
        if anchor.is_none() {
            self.position.cancel_frame();
        }
        self.position.set_reference(anchor);
        self.publish(Vec::new(), false)
    }

    /// Register the menu's measured size.
    pub fn set_floating_size(&mut self, size: Option<Size>) -> DropdownUpdate {
        self.position.set_floating_size(size);
        self.publish(Vec::new(), false)
    }

    /// Register the viewport used by the overflow policy.
    pub fn set_viewport(&mut self, viewport: Option<Rect>) -> DropdownUpdate {
        self.position.set_viewport(viewport);
        self.publish(Vec::new(), false)
    }

    /// A scroll or resize happened; coalesced to one recomputation per frame.
    pub fn geometry_changed(&mut self, sample: GeometrySample) -> DropdownUpdate {
        let mut events = Vec::new();
        if let Some(request) = self.position.geometry_changed(sample) {
            events.push(DropdownEvent::FrameRequested(request));
        }
        self.publish(events, false)
    }

    /// An animation frame requested through [`DropdownEvent::FrameRequested`] fired.
    pub fn on_frame(&mut self, request: FrameRequest) -> DropdownUpdate {
        match self.position.on_frame(request) {
            FrameOutcome::Applied(placement) => {
                tracing::trace!(?placement, "frame applied");
            }
            FrameOutcome::Deferred => tracing::trace!("frame deferred while unmounted"),
            FrameOutcome::Superseded => {}
        }
        self.publish(Vec::new(), false)
    }

    /// Replace the menu items.
    pub fn set_items(&mut self, items: impl IntoIterator<Item = ItemConfig>) -> DropdownUpdate {
        self.items.replace(items);
        self.publish(Vec::new(), false)
    }

    /// Enable or disable item `index`.
    pub fn set_item_disabled(&mut self, index: usize, disabled: bool) -> DropdownUpdate {
        self.items.set_disabled(index, disabled);
        self.publish(Vec::new(), false)
    }

    /// Pointer entered item `index`.
    pub fn hover_item(&mut self, index: usize) -> DropdownUpdate {
        if self.is_open() {
            self.items.hover(index);
        }
        self.publish(Vec::new(), false)
    }

    /// Pointer left item `index`. Clears it if it is still the active one.
    pub fn leave_item(&mut self, index: usize) -> DropdownUpdate {
        if self.items.active() == Some(index) {
            self.items.clear_active();
        }
        self.publish(Vec::new(), false)
    }

    /// Activate item `index` (click, or Enter on the active item).
    ///
    /// Emits [`DropdownEvent::Selected`] once and closes the dropdown unless
    /// the item or the options keep it open. Disabled items, unknown indices
    /// and closed menus are ignored.
    pub fn activate_item(&mut self, index: usize) -> DropdownUpdate {
        let Some(item) = self.items.get(index).copied() else {
            tracing::debug!(index, "activation of unknown item ignored");
            return self.publish(Vec::new(), false);
        };
        if item.disabled || !self.is_open() {
            tracing::trace!(index, disabled = item.disabled, "activation ignored");
            return self.publish(Vec::new(), false);
        }
        self.items.hover(index);
        let events = alloc::vec![DropdownEvent::Selected(index)];
        let disclosure = if self.options.close_on_select && !item.keep_open {
            self.disclosure.close()
        } else {
            Vec::new()
        };
        self.apply(disclosure, events)
    }

    /// Keyboard input while the menu has focus.
    ///
    /// When the dropdown is closed this behaves like the trigger.
    pub fn key(&mut self, key: Key) -> DropdownUpdate {
        if !self.is_open() {
            return self.trigger_key(key);
        }
        match key {
            Key::ArrowDown => self.navigate(ItemList::focus_next),
            Key::ArrowUp => self.navigate(ItemList::focus_prev),
            Key::Home => self.navigate(ItemList::focus_first),
            Key::End => self.navigate(ItemList::focus_last),
            Key::Enter | Key::Space => match self.items.active() {
                Some(index) => self.activate_item(index),
                None => self.close(),
            },
            Key::Escape => self.dismiss(DismissReason::Escape),
            Key::Tab => self.dismiss(DismissReason::Navigation),
        }
    }

    /// Keyboard input on the trigger.
    pub(crate) fn trigger_key(&mut self, key: Key) -> DropdownUpdate {
        match key {
            Key::Enter | Key::Space if self.is_open() => self.close(),
            Key::ArrowDown if self.is_open() => self.navigate(ItemList::focus_next),
            Key::ArrowUp if self.is_open() => self.navigate(ItemList::focus_prev),
            Key::Enter | Key::Space | Key::ArrowDown => self.open_focusing(ItemList::focus_first),
            Key::ArrowUp => self.open_focusing(ItemList::focus_last),
            Key::Escape => self.dismiss(DismissReason::Escape),
            Key::Home | Key::End | Key::Tab => self.publish(Vec::new(), false),
        }
    }

    fn open_focusing(&mut self, focus: fn(&mut ItemList) -> Option<usize>) -> DropdownUpdate {
        let events = self.disclosure.open();
        focus(&mut self.items);
        self.apply(events, Vec::new())
    }

    fn navigate(&mut self, step: fn(&mut ItemList) -> Option<usize>) -> DropdownUpdate {
        step(&mut self.items);
        self.publish(Vec::new(), false)
    }

    // Menu rect in viewport coordinates.
    fn floating_rect(&self) -> Option<Rect> {
        let placement = self.position.placement()?;
        let size = self.position.geometry().floating?;
        let rect = placement.rect(size);
        Some(match placement.strategy {
            Strategy::Fixed => rect,
            Strategy::Absolute => rect + self.options.placement.origin.to_vec2(),
        })
    }

    fn apply(
        &mut self,
        disclosure: Vec<DisclosureEvent>,
        mut events: Vec<DropdownEvent>,
    ) -> DropdownUpdate {
        // The phase is already updated; now the dependent work.
        let mut opened = false;
        for event in &disclosure {
            match event {
                DisclosureEvent::Opened => opened = true,
                DisclosureEvent::Closed => self.items.clear_active(),
                DisclosureEvent::Mounted
                | DisclosureEvent::UnmountScheduled(_)
                | DisclosureEvent::UnmountCancelled(_)
                | DisclosureEvent::Unmounted => {}
            }
        }
        // Placement tracks the menu until it unmounts, so the exit
        // transition follows the anchor.
        self.position.set_open(self.disclosure.is_mounted());
        events.extend(disclosure.into_iter().map(DropdownEvent::Disclosure));
        self.publish(events, opened)
    }

    fn publish(&mut self, events: Vec<DropdownEvent>, opened: bool) -> DropdownUpdate {
        let previous = self.snapshot;
        let mut next = self.capture(previous.revision, previous.opened_revision);
        if next != previous {
            next.revision = previous.revision + 1;
            if opened {
                next.opened_revision = next.revision;
            }
            self.snapshot = next;
            tracing::trace!(
                revision = next.revision,
                is_open = next.is_open,
                mounted = next.mounted,
                "dropdown snapshot published"
            );
        }
        DropdownUpdate {
            snapshot: self.snapshot,
            events,
        }
    }

    fn capture(&self, revision: u64, opened_revision: u64) -> DropdownSnapshot {
        let mounted = self.disclosure.is_mounted();
        DropdownSnapshot {
            revision,
            opened_revision,
            is_open: self.disclosure.is_open(),
            mounted,
            geometry: self.position.geometry(),
            placement: self.position.placement().filter(|_| mounted),
            active_item: self.items.active(),
            rounded: self.options.rounded,
            shadow: self.options.shadow,
            in_portal: self.options.in_portal,
        }
    }
}
