// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The floating menu and its items.
//!
//! [`DropdownMenu::sync`] turns a [`DropdownSnapshot`] into a [`MenuRender`]
//! and keeps the menu's portal entry in step with the snapshot's presence:
//! acquired on mount, raised when reopened, released on unmount.
//!
//! A mounted menu with a known anchor but no measured size renders as
//! [`MenuRender::Measuring`]: lay it out invisibly, then report the size
//! through [`DropdownMenu::measured`].

use kurbo::Size;
use perch_position::Placement;

use crate::dropdown::{Dropdown, DropdownContext, DropdownSnapshot, DropdownUpdate};
use crate::items::ItemState;
use crate::portal::{PortalLayer, PortalSlot};
use crate::tokens::{Rounded, Shadow};

/// Where the menu is drawn.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Layer {
    /// In place, inside the trigger's layout containment.
    Inline,
    /// In the detached portal layer.
    Portal(PortalSlot),
}

/// A positioned, visible menu.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MenuFrame {
    /// Position, side and strategy.
    pub placement: Placement,
    /// Render layer.
    pub layer: Layer,
    /// Rounding token.
    pub rounded: Rounded,
    /// Shadow token.
    pub shadow: Shadow,
    /// True while the exit transition runs.
    pub closing: bool,
}

/// What the menu renders this pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MenuRender {
    /// Nothing is mounted, or there is no anchor to position against.
    Hidden,
    /// Mounted without a measured size; render invisibly and measure.
    Measuring {
        /// Render layer.
        layer: Layer,
    },
    /// Positioned and visible.
    Visible(MenuFrame),
}

/// Consumer for the floating menu.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DropdownMenu {
    slot: Option<PortalSlot>,
    opened_revision: u64,
}

impl DropdownMenu {
    /// Create an unmounted menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// The portal entry held while mounted into the portal layer.
    pub fn slot(&self) -> Option<PortalSlot> {
        self.slot
    }

    /// Bring the render output and portal entry up to date with `snapshot`.
    pub fn sync(&mut self, snapshot: &DropdownSnapshot, portal: &mut PortalLayer) -> MenuRender {
        if !snapshot.mounted {
            self.unmount(portal);
            return MenuRender::Hidden;
        }

        let layer = if snapshot.in_portal {
            let slot = match self.slot {
                Some(slot) if portal.contains(slot) => {
                    if snapshot.opened_revision != self.opened_revision {
                        portal.raise(slot);
                    }
                    slot
                }
                _ => portal.acquire(),
            };
            self.slot = Some(slot);
            Layer::Portal(slot)
        } else {
            self.unmount(portal);
            Layer::Inline
        };
        self.opened_revision = snapshot.opened_revision;

        let geometry = snapshot.geometry;
        let measuring = geometry.reference.is_some() && geometry.floating.is_none();
        match snapshot.placement {
            Some(placement) => MenuRender::Visible(MenuFrame {
                placement,
                layer,
                rounded: snapshot.rounded,
                shadow: snapshot.shadow,
                closing: snapshot.is_closing(),
            }),
            None if measuring => MenuRender::Measuring { layer },
            None => MenuRender::Hidden,
        }
    }

    /// Report the menu's laid-out size.
    pub fn measured(&self, dropdown: &mut Dropdown, size: Size) -> DropdownUpdate {
        dropdown.set_floating_size(Some(size))
    }

    /// Release the portal entry, if any.
    pub fn unmount(&mut self, portal: &mut PortalLayer) {
        if let Some(slot) = self.slot.take() {
            portal.release(slot);
        }
    }
}

/// What an item needs to draw itself.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ItemRender {
    /// Derived state.
    pub state: ItemState,
    /// Rounding token shared with the menu.
    pub rounded: Rounded,
}

/// Consumer for one menu item.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct DropdownItem {
    index: usize,
}

impl DropdownItem {
    /// The item at `index` in the dropdown's [`ItemList`](crate::ItemList).
    pub const fn new(index: usize) -> Self {
        Self { index }
    }

    /// Index of this item.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Derived state.
    pub fn state(&self, cx: &DropdownContext<'_>) -> ItemState {
        cx.item_state(self.index)
    }

    /// Render state.
    pub fn render(&self, cx: &DropdownContext<'_>) -> ItemRender {
        ItemRender {
            state: self.state(cx),
            rounded: cx.snapshot().rounded,
        }
    }

    /// Pointer entered the item.
    pub fn pointer_enter(&self, dropdown: &mut Dropdown) -> DropdownUpdate {
        dropdown.hover_item(self.index)
    }

    /// Pointer left the item.
    pub fn pointer_leave(&self, dropdown: &mut Dropdown) -> DropdownUpdate {
        dropdown.leave_item(self.index)
    }

    /// Click.
    pub fn click(&self, dropdown: &mut Dropdown) -> DropdownUpdate {
        dropdown.activate_item(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DropdownOptions, GeometrySample, ItemConfig};
    use kurbo::{Point, Rect};

    const ANCHOR: Rect = Rect::new(100.0, 50.0, 180.0, 80.0);

    fn dropdown() -> Dropdown {
        let mut dropdown =
            Dropdown::with_items(DropdownOptions::default(), [ItemConfig::default(); 2]);
        dropdown.set_anchor(Some(ANCHOR));
        dropdown
    }

    #[test]
    fn measure_then_show() {
        let mut dropdown = dropdown();
        let mut portal = PortalLayer::new();
        let mut menu = DropdownMenu::new();

        assert_eq!(
            menu.sync(&dropdown.snapshot(), &mut portal),
            MenuRender::Hidden
        );

        let update = dropdown.open();
        let MenuRender::Measuring { layer } = menu.sync(&update.snapshot, &mut portal) else {
            panic!("expected a measuring pass");
        };
        assert_eq!(layer, Layer::Portal(menu.slot().unwrap()));

        let update = menu.measured(&mut dropdown, Size::new(192.0, 120.0));
        let MenuRender::Visible(frame) = menu.sync(&update.snapshot, &mut portal) else {
            panic!("expected a visible menu");
        };
        assert_eq!(frame.placement.coordinates, Point::new(100.0, 80.0));
        assert!(!frame.closing);
        assert_eq!(portal.len(), 1);
    }

    #[test]
    fn portal_entry_follows_presence() {
        let mut dropdown = dropdown();
        dropdown.set_floating_size(Some(Size::new(50.0, 50.0)));
        let mut portal = PortalLayer::new();
        let mut menu = DropdownMenu::new();

        menu.sync(&dropdown.open().snapshot, &mut portal);
        let slot = menu.slot().unwrap();

        let closed = dropdown.close();
        let MenuRender::Visible(frame) = menu.sync(&closed.snapshot, &mut portal) else {
            panic!("still mounted while closing");
        };
        assert!(frame.closing);
        assert!(portal.contains(slot));

        let done = dropdown.grace_elapsed(closed.grace_timer().unwrap());
        assert_eq!(menu.sync(&done.snapshot, &mut portal), MenuRender::Hidden);
        assert!(portal.is_empty());
        assert_eq!(menu.slot(), None);
    }

    #[test]
    fn reopen_raises_existing_entry() {
        let mut first = dropdown();
        let mut second = dropdown();
        first.set_floating_size(Some(Size::new(50.0, 50.0)));
        second.set_floating_size(Some(Size::new(50.0, 50.0)));
        let mut portal = PortalLayer::new();
        let (mut a, mut b) = (DropdownMenu::new(), DropdownMenu::new());

        a.sync(&first.open().snapshot, &mut portal);
        b.sync(&second.open().snapshot, &mut portal);
        assert_eq!(portal.topmost(), b.slot());

        // Close and reopen inside the grace window: same entry, now on top.
        let slot = a.slot();
        a.sync(&first.close().snapshot, &mut portal);
        a.sync(&first.open().snapshot, &mut portal);
        assert_eq!(a.slot(), slot);
        assert_eq!(portal.topmost(), slot);
    }

    #[test]
    fn closing_menu_follows_scrolled_anchor() {
        let mut dropdown = dropdown();
        dropdown.set_floating_size(Some(Size::new(192.0, 120.0)));
        let mut portal = PortalLayer::new();
        let mut menu = DropdownMenu::new();
        menu.sync(&dropdown.open().snapshot, &mut portal);
        dropdown.close();

        let update = dropdown.geometry_changed(GeometrySample {
            reference: Some(Rect::new(100.0, 250.0, 180.0, 280.0)),
            viewport: None,
        });
        let update = dropdown.on_frame(update.frame_request().unwrap());
        let MenuRender::Visible(frame) = menu.sync(&update.snapshot, &mut portal) else {
            panic!("still mounted while closing");
        };
        assert!(frame.closing);
        assert_eq!(frame.placement.coordinates, Point::new(100.0, 280.0));
    }

    #[test]
    fn inline_menu_holds_no_portal_entry() {
        let mut dropdown = Dropdown::new(DropdownOptions {
            in_portal: false,
            ..Default::default()
        });
        dropdown.set_anchor(Some(ANCHOR));
        dropdown.set_floating_size(Some(Size::new(50.0, 50.0)));
        let mut portal = PortalLayer::new();
        let mut menu = DropdownMenu::new();
        let MenuRender::Visible(frame) = menu.sync(&dropdown.open().snapshot, &mut portal) else {
            panic!("expected a visible menu");
        };
        assert_eq!(frame.layer, Layer::Inline);
        assert!(portal.is_empty());
    }

    #[test]
    fn items_track_pointer() {
        let mut dropdown = dropdown();
        dropdown.open();
        let (first, second) = (DropdownItem::new(0), DropdownItem::new(1));

        first.pointer_enter(&mut dropdown);
        assert_eq!(first.state(&dropdown.context()), ItemState::Active);

        // Enter of the next item can arrive before leave of the previous one.
        second.pointer_enter(&mut dropdown);
        first.pointer_leave(&mut dropdown);
        assert_eq!(first.state(&dropdown.context()), ItemState::Idle);
        assert_eq!(second.render(&dropdown.context()).state, ItemState::Active);

        let update = second.click(&mut dropdown);
        assert_eq!(update.selected(), Some(1));
        assert!(!update.snapshot.is_open);
    }
}
