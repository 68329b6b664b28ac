// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The element that opens the dropdown and anchors the menu.

use kurbo::Rect;

use crate::dropdown::{Dropdown, DropdownContext, DropdownUpdate, Key};
use crate::tokens::Rounded;

/// What the trigger needs to draw itself.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TriggerRender {
    /// Exposed to accessibility as "expanded".
    pub expanded: bool,
    /// Rounding token shared with the menu.
    pub rounded: Rounded,
}

/// Consumer for the trigger element.
///
/// Registers the trigger's laid-out bounds as the anchor and forwards
/// activation and keyboard input to the [`Dropdown`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DropdownTrigger {
    anchor: Option<Rect>,
}

impl DropdownTrigger {
    /// Create a trigger that has not been laid out yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last bounds reported through [`layout`](Self::layout).
    pub fn anchor(&self) -> Option<Rect> {
        self.anchor
    }

    /// Render state.
    pub fn render(&self, cx: &DropdownContext<'_>) -> TriggerRender {
        TriggerRender {
            expanded: cx.snapshot().is_open,
            rounded: cx.snapshot().rounded,
        }
    }

    /// Click or equivalent primary activation.
    pub fn activate(&self, dropdown: &mut Dropdown) -> DropdownUpdate {
        dropdown.toggle()
    }

    /// Keyboard input while the trigger has focus.
    pub fn key(&self, dropdown: &mut Dropdown, key: Key) -> DropdownUpdate {
        dropdown.trigger_key(key)
    }

    /// The trigger was laid out at `bounds` (viewport coordinates).
    pub fn layout(&mut self, dropdown: &mut Dropdown, bounds: Rect) -> DropdownUpdate {
        self.anchor = Some(bounds);
        dropdown.set_anchor(Some(bounds))
    }

    /// The trigger left the tree.
    pub fn unmount(&mut self, dropdown: &mut Dropdown) -> DropdownUpdate {
        self.anchor = None;
        dropdown.set_anchor(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DropdownOptions;
    use kurbo::Size;

    #[test]
    fn activation_toggles_and_expands() {
        let mut dropdown = Dropdown::new(DropdownOptions::default());
        let trigger = DropdownTrigger::new();
        assert!(!trigger.render(&dropdown.context()).expanded);
        trigger.activate(&mut dropdown);
        assert!(trigger.render(&dropdown.context()).expanded);
        trigger.activate(&mut dropdown);
        assert!(!trigger.render(&dropdown.context()).expanded);
    }

    #[test]
    fn layout_registers_anchor() {
        let mut dropdown = Dropdown::new(DropdownOptions::default());
        let mut trigger = DropdownTrigger::new();
        let bounds = Rect::new(10.0, 10.0, 60.0, 30.0);
        trigger.layout(&mut dropdown, bounds);
        dropdown.set_floating_size(Some(Size::new(100.0, 40.0)));
        let update = trigger.activate(&mut dropdown);
        assert_eq!(update.snapshot.geometry.reference, Some(bounds));
        assert!(update.snapshot.placement.is_some());

        let update = trigger.unmount(&mut dropdown);
        assert_eq!(trigger.anchor(), None);
        assert_eq!(update.snapshot.placement, None);
    }

    #[test]
    fn escape_on_trigger_dismisses() {
        let mut dropdown = Dropdown::new(DropdownOptions::default());
        let trigger = DropdownTrigger::new();
        trigger.key(&mut dropdown, Key::ArrowDown);
        assert!(dropdown.is_open());
        trigger.key(&mut dropdown, Key::Escape);
        assert!(!dropdown.is_open());
    }
}
