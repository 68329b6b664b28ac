// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide-in drawer.
//!
//! A [`Drawer`] is controlled: the host owns `is_open` and pushes it in with
//! [`Drawer::set_open`]. Escape and overlay presses do not close it; they
//! produce [`DrawerEvent::CloseRequested`] and the host decides.
//!
//! The panel stays mounted for a grace window after closing so its slide-out
//! transition can finish, exactly like a dropdown menu.
//!
//! ```
//! use kurbo::Rect;
//! use perch_overlay::drawer::{Drawer, DrawerOptions, DrawerSize};
//!
//! let mut drawer = Drawer::new(DrawerOptions { size: DrawerSize::Sm, ..Default::default() });
//! drawer.set_open(true);
//! let viewport = Rect::new(0.0, 0.0, 1280.0, 800.0);
//! assert_eq!(drawer.panel_rect(viewport), Rect::new(896.0, 0.0, 1280.0, 800.0));
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::str::FromStr;
use core::time::Duration;

use kurbo::{Rect, Vec2};
use perch_disclosure::{
    DisclosureEvent, DisclosureOptions, DisclosureState, DismissReason, DismissTriggers, GraceTimer,
};
use perch_position::Side;

use crate::error::DrawerError;

/// Slide-out transition length of the drawer.
pub const DEFAULT_DRAWER_GRACE_WINDOW: Duration = Duration::from_millis(300);

/// Preset panel sizes.
///
/// Left/right drawers get a width, top/bottom drawers a height.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DrawerSize {
    /// 384px wide / 30% tall.
    Sm,
    /// 448px wide / 35% tall.
    #[default]
    Md,
    /// 672px wide / 60% tall.
    Lg,
    /// 60% wide / 80% tall.
    Xl,
    /// The whole viewport.
    Full,
}

/// A custom size given as `"<n>px"` or `"<n>%"`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CustomSize {
    /// Absolute length.
    Pixels(f64),
    /// Percentage of the viewport along the drawer's axis.
    Percent(f64),
}

impl FromStr for CustomSize {
    type Err = DrawerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DrawerError::InvalidCustomSize {
            value: s.to_string(),
        };
        let trimmed = s.trim();
        let (number, make): (&str, fn(f64) -> Self) = if let Some(n) = trimmed.strip_suffix("px") {
            (n, Self::Pixels)
        } else if let Some(n) = trimmed.strip_suffix('%') {
            (n, Self::Percent)
        } else {
            return Err(invalid());
        };
        let value = f64::from_str(number.trim_end()).map_err(|_| invalid())?;
        if !value.is_finite() || value < 0.0 {
            return Err(invalid());
        }
        Ok(make(value))
    }
}

impl CustomSize {
    fn resolve(self, available: f64) -> f64 {
        match self {
            Self::Pixels(px) => px.min(available),
            Self::Percent(pct) => available * pct.min(100.0) / 100.0,
        }
    }
}

/// Options for a [`Drawer`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DrawerOptions {
    /// Viewport edge the drawer slides in from.
    pub side: Side,
    /// Preset size.
    pub size: DrawerSize,
    /// Overrides `size` when valid, e.g. `"500px"` or `"90%"`.
    pub custom_size: Option<String>,
    /// How long the panel stays mounted after closing.
    pub grace_window: Duration,
    /// Which signals produce [`DrawerEvent::CloseRequested`].
    pub dismiss_on: DismissTriggers,
}

impl Default for DrawerOptions {
    fn default() -> Self {
        Self {
            side: Side::Right,
            size: DrawerSize::Md,
            custom_size: None,
            grace_window: DEFAULT_DRAWER_GRACE_WINDOW,
            dismiss_on: DismissTriggers::default(),
        }
    }
}

/// The resolved size rule of a drawer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawerExtent {
    /// A preset.
    Preset(DrawerSize),
    /// A parsed custom size.
    Custom(CustomSize),
}

impl DrawerExtent {
    /// Resolve against the viewport length along the drawer's axis.
    pub fn resolve(self, side: Side, available: f64) -> f64 {
        let preset = match self {
            Self::Custom(custom) => return custom.resolve(available),
            Self::Preset(size) => size,
        };
        if side.is_vertical() {
            let pct = match preset {
                DrawerSize::Sm => 30.0,
                DrawerSize::Md => 35.0,
                DrawerSize::Lg => 60.0,
                DrawerSize::Xl => 80.0,
                DrawerSize::Full => 100.0,
            };
            CustomSize::Percent(pct).resolve(available)
        } else {
            let custom = match preset {
                DrawerSize::Sm => CustomSize::Pixels(384.0),
                DrawerSize::Md => CustomSize::Pixels(448.0),
                DrawerSize::Lg => CustomSize::Pixels(672.0),
                DrawerSize::Xl => CustomSize::Percent(60.0),
                DrawerSize::Full => CustomSize::Percent(100.0),
            };
            custom.resolve(available)
        }
    }
}

/// Something the host has to act on.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DrawerEvent {
    /// The user asked to close the drawer; set `is_open` to false to comply.
    CloseRequested(DismissReason),
}

/// A controlled slide-in panel.
#[derive(Clone, Debug)]
pub struct Drawer {
    side: Side,
    extent: DrawerExtent,
    disclosure: DisclosureState,
}

impl Default for Drawer {
    fn default() -> Self {
        Self::new(DrawerOptions::default())
    }
}

impl Drawer {
    /// Create a closed drawer.
    ///
    /// An invalid custom size is logged and the preset is used instead.
    pub fn new(options: DrawerOptions) -> Self {
        let extent = resolve_extent(&options).unwrap_or_else(|err| {
            tracing::warn!(%err, preset = ?options.size, "falling back to preset drawer size");
            DrawerExtent::Preset(options.size)
        });
        Self::with_extent(&options, extent)
    }

    /// Create a closed drawer, rejecting an invalid custom size.
    pub fn try_new(options: DrawerOptions) -> Result<Self, DrawerError> {
        let extent = resolve_extent(&options)?;
        Ok(Self::with_extent(&options, extent))
    }

    fn with_extent(options: &DrawerOptions, extent: DrawerExtent) -> Self {
        Self {
            side: options.side,
            extent,
            disclosure: DisclosureState::new(DisclosureOptions {
                grace_window: options.grace_window,
                dismiss_on: options.dismiss_on,
            }),
        }
    }

    /// Viewport edge the drawer slides in from.
    pub fn side(&self) -> Side {
        self.side
    }

    /// The size rule in effect.
    pub fn extent(&self) -> DrawerExtent {
        self.extent
    }

    /// Host-controlled open state.
    pub fn is_open(&self) -> bool {
        self.disclosure.is_open()
    }

    /// Whether the panel is mounted (open, or sliding out).
    pub fn is_mounted(&self) -> bool {
        self.disclosure.is_mounted()
    }

    /// Apply the host's `is_open`.
    pub fn set_open(&mut self, open: bool) -> Vec<DisclosureEvent> {
        self.disclosure.set_open(open)
    }

    /// A dismissal signal arrived. Never closes the drawer by itself.
    pub fn dismiss(&self, reason: DismissReason) -> Option<DrawerEvent> {
        if !self.is_open() || !self.disclosure.options().dismiss_on.allows(reason) {
            tracing::trace!(?reason, "drawer dismissal ignored");
            return None;
        }
        Some(DrawerEvent::CloseRequested(reason))
    }

    /// The backdrop behind the panel was pressed.
    pub fn overlay_pressed(&self) -> Option<DrawerEvent> {
        self.dismiss(DismissReason::OutsidePointer)
    }

    /// A grace timer fired.
    pub fn grace_elapsed(&mut self, timer: GraceTimer) -> Vec<DisclosureEvent> {
        self.disclosure.grace_elapsed(timer)
    }

    /// The panel rectangle when fully shown.
    pub fn panel_rect(&self, viewport: Rect) -> Rect {
        let size = self.length(viewport);
        match self.side {
            Side::Right => Rect::new(viewport.x1 - size, viewport.y0, viewport.x1, viewport.y1),
            Side::Left => Rect::new(viewport.x0, viewport.y0, viewport.x0 + size, viewport.y1),
            Side::Top => Rect::new(viewport.x0, viewport.y0, viewport.x1, viewport.y0 + size),
            Side::Bottom => Rect::new(viewport.x0, viewport.y1 - size, viewport.x1, viewport.y1),
        }
    }

    /// Translation that moves the shown panel fully off-screen.
    pub fn hidden_offset(&self, viewport: Rect) -> Vec2 {
        let size = self.length(viewport);
        match self.side {
            Side::Right => Vec2::new(size, 0.0),
            Side::Left => Vec2::new(-size, 0.0),
            Side::Top => Vec2::new(0.0, -size),
            Side::Bottom => Vec2::new(0.0, size),
        }
    }

    fn length(&self, viewport: Rect) -> f64 {
        let available = if self.side.is_vertical() {
            viewport.height()
        } else {
            viewport.width()
        };
        self.extent.resolve(self.side, available)
    }
}

fn resolve_extent(options: &DrawerOptions) -> Result<DrawerExtent, DrawerError> {
    match options.custom_size.as_deref() {
        None => Ok(DrawerExtent::Preset(options.size)),
        Some(raw) => Ok(DrawerExtent::Custom(raw.parse()?)),
    }
}
