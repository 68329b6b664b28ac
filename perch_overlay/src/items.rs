// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu items: per-item state and roving active index.
//!
//! An item's state is a pure function of its index, the list's active index,
//! and its own `disabled` flag. The list holds a single `Option<usize>` for the
//! active item, so at most one sibling is ever active.
//!
//! ```
//! use perch_overlay::items::{ItemConfig, ItemList, ItemState};
//!
//! let mut items = ItemList::from_iter([
//!     ItemConfig::default(),
//!     ItemConfig { disabled: true, ..Default::default() },
//!     ItemConfig::default(),
//! ]);
//! items.focus_first();
//! assert_eq!(items.focus_next(), Some(2));
//! assert_eq!(items.state_of(1), ItemState::Disabled);
//! assert_eq!(items.state_of(2), ItemState::Active);
//! ```

use alloc::vec::Vec;

/// Configuration of one item.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ItemConfig {
    /// Excluded from navigation and activation.
    pub disabled: bool,
    /// Activating this item leaves the menu open.
    pub keep_open: bool,
}

/// Derived visual state of an item.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ItemState {
    /// Selectable, not focused.
    #[default]
    Idle,
    /// Holds keyboard/pointer focus among its siblings.
    Active,
    /// Not selectable and skipped by navigation.
    Disabled,
}

/// The items of one menu and which of them is active.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemList {
    items: Vec<ItemConfig>,
    active: Option<usize>,
}

impl FromIterator<ItemConfig> for ItemList {
    fn from_iter<I: IntoIterator<Item = ItemConfig>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
            active: None,
        }
    }
}

impl ItemList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item and return its index.
    pub fn push(&mut self, config: ItemConfig) -> usize {
        self.items.push(config);
        self.items.len() - 1
    }

    /// Replace all items. Clears the active item.
    pub fn replace(&mut self, items: impl IntoIterator<Item = ItemConfig>) {
        self.items.clear();
        self.items.extend(items);
        self.active = None;
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Configuration of item `index`.
    pub fn get(&self, index: usize) -> Option<&ItemConfig> {
        self.items.get(index)
    }

    /// Enable or disable an item. Disabling the active item clears it.
    pub fn set_disabled(&mut self, index: usize, disabled: bool) {
        let Some(item) = self.items.get_mut(index) else {
            return;
        };
        item.disabled = disabled;
        if disabled && self.active == Some(index) {
            self.active = None;
        }
    }

    /// The active index, if any.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// State of item `index`. Out-of-range indices report `Disabled`.
    pub fn state_of(&self, index: usize) -> ItemState {
        match self.items.get(index) {
            None => ItemState::Disabled,
            Some(item) => derive_state(index, self.active, item.disabled),
        }
    }

    fn is_enabled(&self, index: usize) -> bool {
        self.items.get(index).is_some_and(|i| !i.disabled)
    }

    /// Activate the first enabled item.
    pub fn focus_first(&mut self) -> Option<usize> {
        if let Some(i) = (0..self.items.len()).find(|&i| self.is_enabled(i)) {
            self.active = Some(i);
        }
        self.active
    }

    /// Activate the last enabled item.
    pub fn focus_last(&mut self) -> Option<usize> {
        if let Some(i) = (0..self.items.len()).rev().find(|&i| self.is_enabled(i)) {
            self.active = Some(i);
        }
        self.active
    }

    /// Move to the next enabled item. Starts at the first when nothing is
    /// active; stays put at the end.
    pub fn focus_next(&mut self) -> Option<usize> {
        let Some(current) = self.active else {
            return self.focus_first();
        };
        if let Some(i) = (current + 1..self.items.len()).find(|&i| self.is_enabled(i)) {
            self.active = Some(i);
        }
        self.active
    }

    /// Move to the previous enabled item. Starts at the last when nothing is
    /// active; stays put at the start.
    pub fn focus_prev(&mut self) -> Option<usize> {
        let Some(current) = self.active else {
            return self.focus_last();
        };
        if let Some(i) = (0..current).rev().find(|&i| self.is_enabled(i)) {
            self.active = Some(i);
        }
        self.active
    }

    /// Pointer entered item `index`. Returns false (and changes nothing) for
    /// disabled or unknown items.
    pub fn hover(&mut self, index: usize) -> bool {
        if !self.is_enabled(index) {
            return false;
        }
        self.active = Some(index);
        true
    }

    /// Clear the active item.
    pub fn clear_active(&mut self) {
        self.active = None;
    }
}

/// Item state from its identity, the focused sibling and its own flag.
pub fn derive_state(index: usize, active: Option<usize>, disabled: bool) -> ItemState {
    if disabled {
        ItemState::Disabled
    } else if active == Some(index) {
        ItemState::Active
    } else {
        ItemState::Idle
    }
}
