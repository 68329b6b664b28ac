// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dropdown configuration.

use core::time::Duration;

use perch_disclosure::{DisclosureOptions, DismissTriggers};
use perch_position::PlacementOptions;

use crate::tokens::{Rounded, Shadow};

/// Exit transition length of the dropdown menu.
pub const DEFAULT_MENU_GRACE_WINDOW: Duration = Duration::from_millis(75);

/// Options for a [`Dropdown`](crate::Dropdown).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DropdownOptions {
    /// Where the menu goes relative to the trigger.
    pub placement: PlacementOptions,
    /// Corner rounding of the menu and its items.
    pub rounded: Rounded,
    /// Menu drop shadow.
    pub shadow: Shadow,
    /// Render the menu into the detached portal layer instead of in place.
    pub in_portal: bool,
    /// Selecting an item closes the menu unless the item says otherwise.
    pub close_on_select: bool,
    /// How long the menu stays mounted after closing.
    pub grace_window: Duration,
    /// Which dismissal signals close the menu.
    pub dismiss_on: DismissTriggers,
}

impl Default for DropdownOptions {
    fn default() -> Self {
        Self {
            placement: PlacementOptions::default(),
            rounded: Rounded::Md,
            shadow: Shadow::Md,
            in_portal: true,
            close_on_select: true,
            grace_window: DEFAULT_MENU_GRACE_WINDOW,
            dismiss_on: DismissTriggers::default(),
        }
    }
}

impl DropdownOptions {
    pub(crate) fn disclosure(&self) -> DisclosureOptions {
        DisclosureOptions {
            grace_window: self.grace_window,
            dismiss_on: self.dismiss_on,
        }
    }
}
