// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seam to the host's layout engine.

use kurbo::Rect;

use crate::types::GeometrySample;

/// Supplies element bounding boxes and the viewport on demand.
///
/// Implement this for your layout engine (a box tree, a DOM binding, a
/// retained widget tree) and use [`GeometrySample::from_provider`] when it
/// reports a scroll or resize.
pub trait GeometryProvider<K> {
    /// Bounding box of `key` in viewport coordinates, or `None` if the element
    /// is not mounted or cannot be measured.
    fn bounding_box(&self, key: &K) -> Option<Rect>;

    /// The current viewport rectangle.
    fn viewport(&self) -> Rect;
}

impl GeometrySample {
    /// Sample the anchor `key` and the viewport from `provider`.
    pub fn from_provider<K, G>(provider: &G, key: &K) -> Self
    where
        G: GeometryProvider<K> + ?Sized,
    {
        Self {
            reference: provider.bounding_box(key),
            viewport: Some(provider.viewport()),
        }
    }
}
