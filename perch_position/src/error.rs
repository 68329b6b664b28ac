// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement failures.
//!
//! These never escape [`PositionEngine`](crate::PositionEngine): it recovers
//! by reporting no placement, so the floating panel is suppressed instead of
//! being drawn at a default position.

use thiserror::Error;

/// Reasons a placement cannot be computed yet.
#[derive(Copy, Clone, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum PlacementError {
    /// The anchor is not mounted or cannot be measured.
    #[error("anchor geometry is unavailable")]
    MissingAnchorGeometry,

    /// The floating panel has not been measured since it was mounted.
    #[error("floating panel size is unknown")]
    MissingFloatingSize,
}
